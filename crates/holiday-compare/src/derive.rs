//! Facts derived from the packages selected for comparison.
//!
//! Every function here is pure over its input slice and accepts either owned
//! packages or borrowed ones. Ties resolve to the earliest package in input
//! order. Empty input yields `None` rather than a placeholder winner.
use std::borrow::Borrow;

use holiday_catalog::Package;
use serde::Serialize;

/// Badge shown on a compared package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBadge {
    BestValue,
    TopRated,
    MostInclusive,
}

impl ComparisonBadge {
    pub fn label(self) -> &'static str {
        match self {
            ComparisonBadge::BestValue => "Best Value",
            ComparisonBadge::TopRated => "Top Rated",
            ComparisonBadge::MostInclusive => "Most Inclusive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePerNight {
    pub id: String,
    pub price_per_night: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSavings {
    pub id: String,
    pub original_price: u32,
    pub savings: u32,
}

/// Lowest price per night.
pub fn best_value<P: Borrow<Package>>(packages: &[P]) -> Option<&Package> {
    first_winner(packages, |candidate, best| {
        candidate.price_per_night() < best.price_per_night()
    })
}

pub fn highest_rated<P: Borrow<Package>>(packages: &[P]) -> Option<&Package> {
    first_winner(packages, |candidate, best| candidate.rating > best.rating)
}

/// Most amenities listed.
pub fn most_inclusive<P: Borrow<Package>>(packages: &[P]) -> Option<&Package> {
    first_winner(packages, |candidate, best| {
        candidate.amenities.len() > best.amenities.len()
    })
}

pub fn price_per_night_series<P: Borrow<Package>>(packages: &[P]) -> Vec<PricePerNight> {
    packages
        .iter()
        .map(Borrow::borrow)
        .map(|package: &Package| PricePerNight {
            id: package.id.clone(),
            price_per_night: package.rounded_price_per_night(),
        })
        .collect()
}

pub fn savings_series<P: Borrow<Package>>(packages: &[P]) -> Vec<PackageSavings> {
    packages
        .iter()
        .map(Borrow::borrow)
        .map(|package: &Package| PackageSavings {
            id: package.id.clone(),
            original_price: package.original_price(),
            savings: package.savings(),
        })
        .collect()
}

fn first_winner<P, F>(packages: &[P], beats: F) -> Option<&Package>
where
    P: Borrow<Package>,
    F: Fn(&Package, &Package) -> bool,
{
    let mut candidates = packages.iter().map(Borrow::borrow);
    let mut best: &Package = candidates.next()?;
    for candidate in candidates {
        if beats(candidate, best) {
            best = candidate;
        }
    }
    Some(best)
}

/// Everything the comparison views render from one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub best_value_id: String,
    pub highest_rated_id: String,
    pub most_inclusive_id: String,
    pub price_per_night: Vec<PricePerNight>,
    pub savings: Vec<PackageSavings>,
}

impl ComparisonSummary {
    #[tracing::instrument(level = "debug", skip(packages), fields(packages = packages.len()))]
    pub fn derive<P: Borrow<Package>>(packages: &[P]) -> Option<Self> {
        let best_value_id = best_value(packages)?.id.clone();
        let highest_rated_id = highest_rated(packages)?.id.clone();
        let most_inclusive_id = most_inclusive(packages)?.id.clone();
        Some(Self {
            best_value_id,
            highest_rated_id,
            most_inclusive_id,
            price_per_night: price_per_night_series(packages),
            savings: savings_series(packages),
        })
    }

    /// At most one badge per package: best value, then top rated, then most inclusive.
    pub fn badge_for(&self, id: &str) -> Option<ComparisonBadge> {
        if self.best_value_id == id {
            Some(ComparisonBadge::BestValue)
        } else if self.highest_rated_id == id {
            Some(ComparisonBadge::TopRated)
        } else if self.most_inclusive_id == id {
            Some(ComparisonBadge::MostInclusive)
        } else {
            None
        }
    }
}

/// Five-bucket star histogram synthesized from an average rating and a review count.
///
/// This is demo data, not an aggregation of real reviews: half of the reviews
/// land on the rounded star, a fifth on each neighbouring star, and the other
/// stars take up to 5% each from highest to lowest. Any remainder goes back to
/// the rounded star, so the buckets always sum to the review count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntheticRatingDistribution {
    /// Index 0 is one star, index 4 is five stars.
    counts: [u32; 5],
}

impl SyntheticRatingDistribution {
    pub fn for_package(package: &Package) -> Self {
        Self::new(package.rating, package.reviews)
    }

    pub fn new(rating: f64, reviews: u32) -> Self {
        let base = if rating.is_finite() {
            rating.round().clamp(1.0, 5.0) as usize
        } else {
            1
        };
        let total = i64::from(reviews);
        let share = |fraction: f64| (total as f64 * fraction).round() as i64;

        // Indexed by star; slot 0 is unused.
        let mut buckets = [0_i64; 6];
        buckets[base] = share(0.5);
        if base < 5 {
            buckets[base + 1] = share(0.2);
        }
        if base > 1 {
            buckets[base - 1] = share(0.2);
        }

        let mut remaining = total - buckets.iter().sum::<i64>();
        for star in (1..=5_usize).rev() {
            if remaining <= 0 {
                break;
            }
            if star.abs_diff(base) > 1 {
                buckets[star] = remaining.min(share(0.05));
                remaining -= buckets[star];
            }
        }

        if remaining > 0 {
            buckets[base] += remaining;
        } else if remaining < 0 {
            // Rounding overshoot on small counts: trim the base star, then its neighbours.
            let mut overshoot = -remaining;
            let neighbours = [Some(base), base.checked_sub(1), Some(base + 1)];
            for star in neighbours.into_iter().flatten().filter(|star| (1..=5).contains(star)) {
                let taken = overshoot.min(buckets[star]);
                buckets[star] -= taken;
                overshoot -= taken;
            }
        }

        let mut counts = [0_u32; 5];
        for (slot, count) in counts.iter_mut().zip(buckets[1..].iter()) {
            *slot = u32::try_from(*count).unwrap_or(0);
        }
        Self { counts }
    }

    /// Reviews in the `star` bucket; zero outside `1..=5`.
    pub fn count(&self, star: u8) -> u32 {
        match star {
            1..=5 => self.counts[usize::from(star) - 1],
            _ => 0,
        }
    }

    pub fn counts(&self) -> [u32; 5] {
        self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Whole-percent share of `star`, zero when there are no reviews.
    pub fn percentage(&self, star: u8) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.count(star)) / f64::from(total) * 100.0).round() as u32
    }
}
