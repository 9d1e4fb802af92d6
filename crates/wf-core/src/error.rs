use std::path::PathBuf;

use crate::catalog::TemplateKind;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A template violates one of its stat constraints.
    #[error("invalid {kind} \"{name}\": {reason}")]
    Invalid {
        /// Category of the offending template.
        kind: TemplateKind,
        /// Name of the offending template.
        name: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// Two templates of the same category share a name.
    #[error("duplicate {kind} \"{name}\"")]
    DuplicateName {
        /// Category of the duplicated template.
        kind: TemplateKind,
        /// The duplicated name.
        name: String,
    },

    /// A category has no templates at all.
    #[error("catalog has no {0} templates")]
    EmptyCategory(TemplateKind),
}
