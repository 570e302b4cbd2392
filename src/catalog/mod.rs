//! Material catalog collaborator.
//!
//! The estimator never loads or mutates materials itself; callers build a
//! `MaterialCatalog` (from the embedded defaults or a file) and pass it in.

mod loader;
mod registry;
mod types;

pub use loader::{default_catalog, load_catalog};
pub use registry::MaterialCatalog;
pub use types::*;
