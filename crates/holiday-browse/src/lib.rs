//! Listing-page filtering and ordering over a holiday catalog.
//!
//! Both stages are pure: they borrow packages from the catalog and return a
//! new ordering without touching the records themselves.

mod criteria;
mod filter;
mod sort;

pub use criteria::{FilterCriteria, PriceRange};
pub use filter::{filter_packages, matches_criteria};
pub use sort::{sort_packages, DurationOrder, SortKey, SortKeyParseError};

use holiday_catalog::{Catalog, Package};

/// Filters the catalog with `criteria`, then orders the matches by `key`.
pub fn browse<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    key: SortKey,
) -> Vec<&'a Package> {
    sort_packages(filter_packages(catalog, criteria), key)
}
