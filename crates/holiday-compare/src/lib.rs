//! Package selection and comparison engine.
//!
//! [`CompareSession`] is the single state boundary: it owns the bounded
//! [`SelectionSet`], mirrors it through [`SelectionPersistence`], and feeds the
//! selected packages to the derivations in [`derive`] and [`insights`].

pub mod derive;
pub mod insights;
pub mod links;
pub mod persistence;
pub mod selection;
pub mod session;
pub mod settings;

pub use derive::{
    best_value, highest_rated, most_inclusive, price_per_night_series, savings_series,
    ComparisonBadge, ComparisonSummary, PackageSavings, PricePerNight,
    SyntheticRatingDistribution,
};
pub use insights::{AmenityMatrix, CostBreakdown, RadarProfile};
pub use links::{
    compare_query, format_compare_ids, parse_compare_ids, resolve_compare_link,
    COMPARE_IDS_PARAM,
};
pub use persistence::{
    decode_persisted_ids, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore,
    SelectionPersistence, StorageError,
};
pub use selection::{SelectionResult, SelectionSet};
pub use session::CompareSession;
pub use settings::{CompareSettings, SettingsError, DEFAULT_MAX_COMPARE, DEFAULT_STORAGE_KEY};
