//! Read-only holiday package catalog: record types, validation, and loading.

mod catalog;
mod model;

pub use catalog::{Catalog, CatalogError, DEMO_CATALOG_JSON};
pub use model::{ItineraryDay, Package, PriceType};
