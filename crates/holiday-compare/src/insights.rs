//! Chart and table inputs for the comparison views.
//!
//! Cost breakdowns and radar scores are illustrative estimates computed from
//! headline fields; the catalog carries no itemised costs or category scores.
use std::borrow::Borrow;
use std::collections::HashSet;

use holiday_catalog::Package;
use serde::Serialize;

/// Union of amenities across the compared packages, with per-package membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmenityMatrix {
    pub package_ids: Vec<String>,
    pub amenities: Vec<String>,
    /// `rows[amenity][package]`, aligned with `amenities` and `package_ids`.
    pub rows: Vec<Vec<bool>>,
}

impl AmenityMatrix {
    pub fn build<P: Borrow<Package>>(packages: &[P]) -> Self {
        let packages = packages.iter().map(Borrow::borrow).collect::<Vec<&Package>>();
        let mut seen = HashSet::new();
        let mut amenities = Vec::new();
        for package in &packages {
            for amenity in &package.amenities {
                if seen.insert(amenity.as_str()) {
                    amenities.push(amenity.clone());
                }
            }
        }
        let rows = amenities
            .iter()
            .map(|amenity| {
                packages
                    .iter()
                    .map(|package| package.amenities.contains(amenity))
                    .collect()
            })
            .collect();
        Self {
            package_ids: packages.iter().map(|package| package.id.clone()).collect(),
            amenities,
            rows,
        }
    }

    pub fn row(&self, amenity: &str) -> Option<&[bool]> {
        let position = self.amenities.iter().position(|name| name == amenity)?;
        self.rows.get(position).map(Vec::as_slice)
    }

    /// Amenities every compared package offers.
    pub fn shared_by_all(&self) -> Vec<&str> {
        self.amenities
            .iter()
            .zip(&self.rows)
            .filter(|(_, row)| !row.is_empty() && row.iter().all(|present| *present))
            .map(|(amenity, _)| amenity.as_str())
            .collect()
    }
}

/// Estimated split of a package price into spending categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub accommodation: u32,
    pub meals: u32,
    pub activities: u32,
    pub transport: u32,
}

impl CostBreakdown {
    pub fn estimate(package: &Package) -> Self {
        let share = |fraction: f64| (f64::from(package.price) * fraction).round() as u32;
        Self {
            accommodation: share(0.6),
            meals: share(0.15),
            activities: share(0.15),
            transport: share(0.1),
        }
    }

    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("Accommodation", self.accommodation),
            ("Meals", self.meals),
            ("Activities", self.activities),
            ("Transport", self.transport),
        ]
    }
}

/// Five 0-5 scores for the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarProfile {
    pub value: f64,
    pub luxury: u8,
    pub activities: u8,
    pub location: u8,
    pub food: u8,
}

impl RadarProfile {
    pub fn score(package: &Package) -> Self {
        let value = (5.0 - f64::from(package.price) / 3000.0 * 5.0).clamp(0.0, 5.0);
        let luxury = if package.kind == "luxury" {
            5
        } else if package.price > 1500 {
            4
        } else if package.price > 1000 {
            3
        } else {
            2
        };
        let activities = match package.activities.len() {
            0 => 1,
            count if count > 5 => 5,
            count => count as u8,
        };
        let location = if package.rating > 4.5 {
            5
        } else if package.rating > 4.0 {
            4
        } else {
            3
        };
        let food = match package.meals.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("all-inclusive") => 5,
            Some("full board") => 4,
            Some("half board") => 3,
            _ => 2,
        };
        Self {
            value,
            luxury,
            activities,
            location,
            food,
        }
    }
}
