pub mod entry;
pub mod loader;
pub mod reference;
pub mod schema;

pub use entry::{Catalog, IssueCatalogEntry};
pub use loader::{load_catalog, parse_catalog, resolve_catalog};
pub use reference::REFERENCE_ISSUES;
