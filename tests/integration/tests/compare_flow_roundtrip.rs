use std::{collections::BTreeMap, sync::Arc};

use holiday_browse::{browse, filter_packages, sort_packages, FilterCriteria, SortKey};
use holiday_catalog::{Catalog, Package};
use holiday_compare::{
    resolve_compare_link, AmenityMatrix, CompareSession, CompareSettings, ComparisonBadge,
    ComparisonSummary, FileKeyValueStore, InMemoryKeyValueStore, SelectionResult,
    SyntheticRatingDistribution,
};
use serde_json::Value;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_test_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_test_writer()
        .compact()
        .try_init();
}

fn scenario_package(id: &str, price: u32, duration: u32, rating: f64, amenities: usize) -> Package {
    Package {
        price,
        duration,
        rating,
        amenities: (0..amenities).map(|index| format!("amenity {index}")).collect(),
        ..Package::new(id, format!("Scenario {id}"))
    }
}

fn scenario_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            scenario_package("A", 1299, 7, 4.8, 5),
            scenario_package("B", 899, 5, 4.6, 5),
            scenario_package("C", 1499, 6, 4.9, 10),
            scenario_package("D", 749, 4, 4.5, 5),
        ])
        .expect("scenario catalog"),
    )
}

fn ids(packages: &[&Package]) -> Vec<String> {
    packages.iter().map(|package| package.id.clone()).collect()
}

#[test]
fn price_filter_then_price_sort_matches_listing_scenarios() {
    let catalog = scenario_catalog();
    let abc = catalog.resolve(["A", "B", "C"]);

    let filtered = filter_packages(
        abc.iter().copied(),
        &FilterCriteria::default().with_price_range(900, 1500),
    );
    assert_eq!(ids(&filtered), vec!["A", "C"]);

    let sorted = sort_packages(abc.iter().copied(), SortKey::PriceAsc);
    assert_eq!(ids(&sorted), vec!["B", "A", "C"]);
}

#[test]
fn capacity_rejection_then_removal_frees_a_slot() {
    init_test_tracing();
    let settings = CompareSettings::default().with_max_compare(3);
    let mut session =
        CompareSession::open(scenario_catalog(), InMemoryKeyValueStore::new(), &settings);

    assert_eq!(session.toggle("A"), SelectionResult::Added);
    assert_eq!(session.toggle("B"), SelectionResult::Added);
    assert_eq!(session.toggle("C"), SelectionResult::Added);
    let rejected = session.toggle("D");
    assert_eq!(rejected, SelectionResult::RejectedAtCapacity);
    assert!(rejected.notice(settings.max_compare).is_some());
    assert_eq!(session.selection().len(), 3);

    assert_eq!(session.toggle("A"), SelectionResult::Removed);
    assert_eq!(session.selection().len(), 2);
    assert_eq!(session.toggle("D"), SelectionResult::Added);
}

#[test]
fn comparison_of_two_selected_packages_names_each_winner() {
    let mut session = CompareSession::open(
        scenario_catalog(),
        InMemoryKeyValueStore::new(),
        &CompareSettings::default(),
    );
    session.toggle("A");
    session.toggle("C");

    let summary = session.summary().expect("summary for two packages");
    assert_eq!(summary.best_value_id, "A");
    assert_eq!(summary.highest_rated_id, "C");
    assert_eq!(summary.most_inclusive_id, "C");
    assert_eq!(summary.badge_for("A"), Some(ComparisonBadge::BestValue));
    assert_eq!(summary.badge_for("C"), Some(ComparisonBadge::TopRated));
}

#[test]
fn discount_savings_use_canonical_rounding() {
    let package = Package {
        discount: 15,
        ..scenario_package("A", 1299, 7, 4.8, 5)
    };
    assert_eq!(package.original_price(), 1528);
    assert_eq!(package.savings(), 229);

    let summary = ComparisonSummary::derive(&[package]).expect("summary");
    assert_eq!(summary.savings[0].savings, 229);
}

#[test]
fn selection_survives_reload_through_file_storage() {
    init_test_tracing();
    let temp = tempfile::tempdir().expect("tempdir");
    let settings = CompareSettings::from_env_map(&BTreeMap::from([(
        "HOLIDAY_COMPARE_MAX".to_string(),
        "3".to_string(),
    )]))
    .expect("settings");
    let catalog = Arc::new(Catalog::demo().expect("demo catalog"));

    let mut session = CompareSession::open(
        Arc::clone(&catalog),
        FileKeyValueStore::new(temp.path()),
        &settings,
    );
    for id in ["1", "3", "4"] {
        assert_eq!(session.toggle(id), SelectionResult::Added);
    }

    let raw = std::fs::read_to_string(temp.path().join("packagesToCompare.json"))
        .expect("persisted selection");
    let records: Vec<Value> = serde_json::from_str(&raw).expect("json array of records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1]["title"], "Mountain Adventure Lodge");
    assert_eq!(records[2]["roomType"], "Overwater Villa with Pool");

    let reopened = CompareSession::open(catalog, FileKeyValueStore::new(temp.path()), &settings);
    assert_eq!(reopened.selection().ids(), ["1", "3", "4"]);
    assert_eq!(reopened.compare_ids(), "1,3,4");
}

#[test]
fn demo_listing_browse_and_compare_link_agree() {
    let catalog = Catalog::demo().expect("demo catalog");
    let settings = CompareSettings::default();

    let beach = FilterCriteria::for_catalog(&catalog)
        .with_tag("beach")
        .with_search_term("resort");
    let key = SortKey::parse_with("duration", settings.duration_order).expect("sort key");
    let listed = browse(&catalog, &beach, key);
    assert_eq!(ids(&listed), vec!["1", "6"]);

    let linked = resolve_compare_link(&catalog, "6,1,999", settings.max_compare);
    assert_eq!(ids(&linked), vec!["1", "6"]);

    let matrix = AmenityMatrix::build(&linked);
    assert!(matrix.shared_by_all().contains(&"Beach access"));

    let maldives = catalog.get("4").expect("maldives");
    let distribution = SyntheticRatingDistribution::for_package(maldives);
    assert_eq!(distribution.total(), maldives.reviews);
}
