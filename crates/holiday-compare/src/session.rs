//! Explicit comparison state: catalog, selection set, and its persisted mirror.
use std::sync::Arc;

use holiday_catalog::{Catalog, Package};

use crate::derive::ComparisonSummary;
use crate::links::format_compare_ids;
use crate::persistence::{KeyValueStore, SelectionPersistence};
use crate::selection::{SelectionResult, SelectionSet};
use crate::settings::CompareSettings;

/// One user's comparison state.
///
/// Every successful mutation rewrites the persisted selection with the full
/// resolved package records.
#[derive(Debug)]
pub struct CompareSession<S> {
    catalog: Arc<Catalog>,
    selection: SelectionSet,
    persistence: SelectionPersistence<S>,
}

impl<S: KeyValueStore> CompareSession<S> {
    /// Opens a session, hydrating the selection from `store`.
    pub fn open(catalog: Arc<Catalog>, store: S, settings: &CompareSettings) -> Self {
        let persistence = SelectionPersistence::new(store, settings.storage_key.clone());
        let (known, retired): (Vec<String>, Vec<String>) = persistence
            .load()
            .into_iter()
            .partition(|id| catalog.contains(id));
        if !retired.is_empty() {
            let titles = persistence
                .load_packages()
                .into_iter()
                .filter(|package| retired.contains(&package.id))
                .map(|package| package.title)
                .collect::<Vec<_>>();
            tracing::warn!(
                key = %settings.storage_key,
                ?retired,
                ?titles,
                "dropped stored packages missing from the catalog"
            );
        }
        let selection = SelectionSet::hydrate(settings.max_compare, known);
        tracing::debug!(
            key = %settings.storage_key,
            restored = selection.len(),
            capacity = selection.capacity(),
            "opened comparison session"
        );
        Self {
            catalog,
            selection,
            persistence,
        }
    }

    /// Toggles `id`; ids the catalog does not know are ignored.
    pub fn toggle(&mut self, id: &str) -> SelectionResult {
        if !self.catalog.contains(id) {
            tracing::debug!(id, "ignored toggle for unknown package");
            return SelectionResult::UnknownPackage;
        }
        let result = self.selection.toggle(id);
        if result.changed() {
            self.persist();
        }
        result
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.persist();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn persistence(&self) -> &SelectionPersistence<S> {
        &self.persistence
    }

    pub fn into_store(self) -> S {
        self.persistence.into_store()
    }

    /// Selected packages that still resolve against the catalog, in selection order.
    pub fn selected_packages(&self) -> Vec<&Package> {
        self.selection.resolve(&self.catalog)
    }

    /// Comparison facts, once at least one selected package resolves.
    pub fn summary(&self) -> Option<ComparisonSummary> {
        ComparisonSummary::derive(&self.selected_packages())
    }

    /// `ids` value for a compare-page link to the current selection.
    pub fn compare_ids(&self) -> String {
        format_compare_ids(self.selection.ids())
    }

    fn persist(&mut self) {
        let packages = self.selection.resolve(&self.catalog);
        if let Err(error) = self.persistence.save(packages) {
            tracing::warn!(
                key = %self.persistence.key(),
                %error,
                "failed to persist comparison selection"
            );
        }
    }
}
