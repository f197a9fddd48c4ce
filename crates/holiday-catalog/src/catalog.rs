use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Package;

/// Demo dataset shipped with the crate.
pub const DEMO_CATALOG_JSON: &str = include_str!("../fixtures/holiday-packages.json");

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("package at index {index} has an empty id")]
    EmptyId { index: usize },
    #[error("package id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("package '{id}' has discount {discount}% (expected 0..100)")]
    InvalidDiscount { id: String, discount: u8 },
    #[error("package '{id}' has rating {rating} (expected 0..=5)")]
    InvalidRating { id: String, rating: f64 },
    #[error("package '{id}' must last at least one night")]
    ZeroDuration { id: String },
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Fixed, validated collection of packages. There is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    packages: Vec<Package>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(packages.len());
        for (position, package) in packages.iter().enumerate() {
            validate_package(position, package)?;
            if index.insert(package.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(package.id.clone()));
            }
        }
        Ok(Self { packages, index })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let packages = serde_json::from_str::<Vec<Package>>(raw)?;
        Self::new(packages)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parses the embedded demo dataset.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json_str(DEMO_CATALOG_JSON)
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Package> {
        self.index
            .get(id)
            .and_then(|position| self.packages.get(*position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolves `ids` in the given order; ids missing from the catalog are dropped.
    pub fn resolve<'a, I, S>(&'a self, ids: I) -> Vec<&'a Package>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| self.get(id.as_ref()))
            .collect()
    }

    /// Inclusive `(min, max)` price across the catalog.
    pub fn price_span(&self) -> Option<(u32, u32)> {
        let min = self.packages.iter().map(|package| package.price).min()?;
        let max = self.packages.iter().map(|package| package.price).max()?;
        Some((min, max))
    }

    /// Distinct category labels in first-appearance order, type before tags.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for package in &self.packages {
            let labels = std::iter::once(package.kind.as_str())
                .chain(package.tags.iter().map(String::as_str));
            for label in labels {
                if !label.is_empty() && seen.insert(label) {
                    tags.push(label);
                }
            }
        }
        tags
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

fn validate_package(position: usize, package: &Package) -> Result<(), CatalogError> {
    if package.id.trim().is_empty() {
        return Err(CatalogError::EmptyId { index: position });
    }
    if package.discount >= 100 {
        return Err(CatalogError::InvalidDiscount {
            id: package.id.clone(),
            discount: package.discount,
        });
    }
    if !package.rating.is_finite() || !(0.0..=5.0).contains(&package.rating) {
        return Err(CatalogError::InvalidRating {
            id: package.id.clone(),
            rating: package.rating,
        });
    }
    if package.duration == 0 {
        return Err(CatalogError::ZeroDuration {
            id: package.id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::model::Package;

    fn package(id: &str, price: u32) -> Package {
        Package {
            price,
            ..Package::new(id, format!("Package {id}"))
        }
    }

    #[test]
    fn demo_catalog_loads_six_valid_packages() {
        let catalog = Catalog::demo().expect("demo catalog");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.price_span(), Some((749, 2999)));
        let maldives = catalog.get("4").expect("package 4");
        assert_eq!(maldives.location, "Maldives");
        assert_eq!(maldives.itinerary.len(), 5);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn tags_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::demo().expect("demo catalog");
        let tags = catalog.tags();
        assert_eq!(&tags[..4], ["beach", "luxury", "all-inclusive", "city"]);
        let unique = tags.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn resolve_keeps_requested_order_and_drops_unknown_ids() {
        let catalog =
            Catalog::new(vec![package("a", 1), package("b", 2), package("c", 3)]).expect("catalog");
        let resolved = catalog
            .resolve(["c", "zz", "a"])
            .into_iter()
            .map(|package| package.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(resolved, vec!["c", "a"]);
    }

    #[test]
    fn rejects_duplicate_ids_and_out_of_range_fields() {
        let duplicate = Catalog::new(vec![package("a", 1), package("a", 2)]).expect_err("dup");
        assert!(matches!(duplicate, CatalogError::DuplicateId(id) if id == "a"));

        let mut discounted = package("d", 10);
        discounted.discount = 100;
        assert!(matches!(
            Catalog::new(vec![discounted]),
            Err(CatalogError::InvalidDiscount { discount: 100, .. })
        ));

        let mut rated = package("r", 10);
        rated.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![rated]),
            Err(CatalogError::InvalidRating { .. })
        ));

        let mut instant = package("i", 10);
        instant.duration = 0;
        assert!(matches!(
            Catalog::new(vec![instant]),
            Err(CatalogError::ZeroDuration { .. })
        ));

        assert!(matches!(
            Catalog::new(vec![package(" ", 1)]),
            Err(CatalogError::EmptyId { index: 0 })
        ));
    }

    #[test]
    fn empty_catalog_has_no_price_span() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog");
        assert!(catalog.is_empty());
        assert_eq!(catalog.price_span(), None);
        assert!(catalog.tags().is_empty());
    }

    #[test]
    fn load_reads_catalog_file_and_reports_missing_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id":"x","title":"Lake Cabin","price":300,"duration":2,"type":"adventure"}]"#,
        )
        .expect("write catalog");
        let catalog = Catalog::load(&path).expect("load");
        assert_eq!(catalog.get("x").map(|package| package.price), Some(300));

        let missing = Catalog::load(temp.path().join("absent.json")).expect_err("missing");
        assert!(missing.to_string().contains("failed to read catalog"));

        let malformed = Catalog::from_json_str("{not json").expect_err("malformed");
        assert!(matches!(malformed, CatalogError::Json(_)));
    }
}
