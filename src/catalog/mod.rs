//! Talent catalog wiring.
//!
//! This module wraps the JSON catalog shipped under `data/talents.json` so
//! callers can load a validated snapshot and query it in a stable order.
//! Types here mirror the catalog schema; `CatalogStore` is the read surface
//! the form adapter and CLI build on.

pub mod identity;
pub mod model;
pub mod store;

pub use identity::{SourceBook, TalentId};
pub use model::{Talent, TalentCatalog, load_catalog_from_path};
pub use store::{CATALOG_SCHEMA_VERSION, CatalogStore};
