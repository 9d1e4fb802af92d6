pub mod catalog;
pub mod play;
pub mod world;

use std::path::Path;

use wf_core::Catalog;

/// Load a catalog file, or fall back to the built-in catalog.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            let catalog = Catalog::load(path).map_err(|e| e.to_string())?;
            tracing::debug!(path = %path.display(), templates = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
