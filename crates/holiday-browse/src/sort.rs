use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use holiday_catalog::Package;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a sort key spelling is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{value}' (expected recommended|price-asc|price-desc|rating-desc|duration-asc|duration-desc)")]
pub struct SortKeyParseError {
    pub value: String,
}

/// Direction applied to the bare `duration` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DurationOrder {
    #[default]
    Ascending,
    Descending,
}

impl DurationOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    DurationAsc,
    DurationDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Recommended,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::DurationAsc,
        SortKey::DurationDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::DurationDesc => "duration-desc",
        }
    }

    /// Parses canonical and legacy listing spellings (`price-low`, `price-high`,
    /// `rating`, `duration`); bare `duration` follows `duration_order`.
    pub fn parse_with(raw: &str, duration_order: DurationOrder) -> Result<Self, SortKeyParseError> {
        let normalized = raw.trim().to_ascii_lowercase();
        let key = match normalized.as_str() {
            "" | "recommended" => SortKey::Recommended,
            "price-asc" | "price-low" => SortKey::PriceAsc,
            "price-desc" | "price-high" => SortKey::PriceDesc,
            "rating-desc" | "rating" => SortKey::RatingDesc,
            "duration-asc" => SortKey::DurationAsc,
            "duration-desc" => SortKey::DurationDesc,
            "duration" => match duration_order {
                DurationOrder::Ascending => SortKey::DurationAsc,
                DurationOrder::Descending => SortKey::DurationDesc,
            },
            _ => {
                return Err(SortKeyParseError {
                    value: raw.to_string(),
                })
            }
        };
        Ok(key)
    }

    fn compare(self, left: &Package, right: &Package) -> Ordering {
        match self {
            SortKey::Recommended => Ordering::Equal,
            SortKey::PriceAsc => left.price.cmp(&right.price),
            SortKey::PriceDesc => right.price.cmp(&left.price),
            SortKey::RatingDesc => right.rating.total_cmp(&left.rating),
            SortKey::DurationAsc => left.duration.cmp(&right.duration),
            SortKey::DurationDesc => right.duration.cmp(&left.duration),
        }
    }
}

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_with(raw, DurationOrder::default())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a new ordering of `packages`; equal keys keep their input order.
#[tracing::instrument(level = "debug", skip(packages, key), fields(key = %key))]
pub fn sort_packages<'a, I>(packages: I, key: SortKey) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
{
    let mut ordered = packages.into_iter().collect::<Vec<_>>();
    if key != SortKey::Recommended {
        // `sort_by` is stable.
        ordered.sort_by(|left, right| key.compare(left, right));
    }
    ordered
}
