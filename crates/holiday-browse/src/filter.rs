use holiday_catalog::Package;

use crate::criteria::FilterCriteria;

/// Keeps the packages that pass the tag, price, and search predicates, in input order.
#[tracing::instrument(
    level = "debug",
    skip(packages, criteria),
    fields(tag = ?criteria.tag, min_price = criteria.price_range.min, max_price = criteria.price_range.max)
)]
pub fn filter_packages<'a, I>(packages: I, criteria: &FilterCriteria) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
{
    let needle = criteria.search_needle();
    let matched = packages
        .into_iter()
        .filter(|package| passes(package, criteria, needle.as_deref()))
        .collect::<Vec<_>>();
    tracing::debug!(matched = matched.len(), "filtered packages");
    matched
}

/// Single-package form of [`filter_packages`].
pub fn matches_criteria(package: &Package, criteria: &FilterCriteria) -> bool {
    passes(package, criteria, criteria.search_needle().as_deref())
}

fn passes(package: &Package, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    if let Some(tag) = criteria.tag.as_deref() {
        if !package.has_tag(tag) {
            return false;
        }
    }
    if !criteria.price_range.contains(package.price) {
        return false;
    }
    match needle {
        None => true,
        Some(needle) => [
            package.title.as_str(),
            package.location.as_str(),
            package.description.as_str(),
            package.kind.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle)),
    }
}
