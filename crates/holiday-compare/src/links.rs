//! `ids=a,b,c` compare-page links.
use std::collections::HashSet;

use holiday_catalog::{Catalog, Package};

pub const COMPARE_IDS_PARAM: &str = "ids";

/// Parses the comma-separated `ids` value: trimmed, blanks dropped, first
/// occurrence kept, at most `max_compare` ids.
pub fn parse_compare_ids(raw: &str, max_compare: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .take(max_compare)
        .map(str::to_string)
        .collect()
}

pub fn format_compare_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// `ids=...` query string for the compare page.
pub fn compare_query<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{COMPARE_IDS_PARAM}={}", format_compare_ids(ids))
}

/// Packages named by a link, in catalog order; unknown ids are ignored.
pub fn resolve_compare_link<'a>(
    catalog: &'a Catalog,
    raw: &str,
    max_compare: usize,
) -> Vec<&'a Package> {
    let requested = parse_compare_ids(raw, max_compare);
    catalog
        .iter()
        .filter(|package| requested.iter().any(|id| *id == package.id))
        .collect()
}
