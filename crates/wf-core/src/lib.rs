//! Core types for Wayfarer: catalog templates, creatures, and inventory.
//!
//! This crate holds the data model the engine plays with. It performs no
//! I/O beyond parsing a catalog from JSON; every mutation reports what it did
//! through its return value and leaves announcing to the caller.

/// Static template definitions for enemies, items, traps, and rest spots.
pub mod catalog;
/// Shared combat state and the hero/enemy creatures built on it.
pub mod creature;
/// Error types used throughout the crate.
pub mod error;
/// The hero's backpack of unique items.
pub mod inventory;

/// Re-export catalog types.
pub use catalog::{
    Catalog, EnemyTemplate, ItemTemplate, MAX_STAT, RestTemplate, TemplateKind, TrapTemplate,
};
/// Re-export creature types.
pub use creature::{Creature, Enemy, Hero, Vitals};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export inventory types.
pub use inventory::{AddOutcome, Inventory};
