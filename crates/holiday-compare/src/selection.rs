//! Bounded set of package ids chosen for comparison.
use holiday_catalog::{Catalog, Package};
use serde::{Deserialize, Serialize};

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionResult {
    Added,
    Removed,
    /// The set was full; nothing changed.
    RejectedAtCapacity,
    /// The id is not in the catalog; nothing changed.
    UnknownPackage,
}

impl SelectionResult {
    /// Returns true when the toggle mutated the set.
    pub fn changed(self) -> bool {
        matches!(self, SelectionResult::Added | SelectionResult::Removed)
    }

    /// User-facing notice for a rejected toggle.
    pub fn notice(self, capacity: usize) -> Option<String> {
        match self {
            SelectionResult::RejectedAtCapacity => Some(format!(
                "You can compare up to {capacity} packages at a time. Please remove one to add another."
            )),
            SelectionResult::Added
            | SelectionResult::Removed
            | SelectionResult::UnknownPackage => None,
        }
    }
}

/// Insertion-ordered id set that never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
    capacity: usize,
}

impl SelectionSet {
    /// Empty set; a zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuilds a set from previously stored ids, skipping duplicates and
    /// anything past capacity.
    pub fn hydrate<I, S>(capacity: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new(capacity);
        for id in ids {
            let id = id.into();
            if selection.is_full() {
                break;
            }
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn toggle(&mut self, id: &str) -> SelectionResult {
        if let Some(position) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(position);
            return SelectionResult::Removed;
        }
        if self.is_full() {
            tracing::warn!(
                package_id = id,
                capacity = self.capacity,
                "comparison selection is full; toggle rejected"
            );
            return SelectionResult::RejectedAtCapacity;
        }
        self.ids.push(id.to_string());
        SelectionResult::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Selected packages in selection order; ids the catalog no longer knows are dropped.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Package> {
        catalog.resolve(&self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectionResult, SelectionSet};
    use holiday_catalog::{Catalog, Package};
    use proptest::prelude::*;

    #[test]
    fn rejects_fourth_package_when_capacity_is_three() {
        let mut selection = SelectionSet::new(3);
        assert_eq!(selection.toggle("A"), SelectionResult::Added);
        assert_eq!(selection.toggle("B"), SelectionResult::Added);
        assert_eq!(selection.toggle("C"), SelectionResult::Added);
        assert_eq!(selection.toggle("D"), SelectionResult::RejectedAtCapacity);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains("D"));
    }

    #[test]
    fn removing_frees_a_slot_for_the_rejected_package() {
        let mut selection = SelectionSet::hydrate(3, ["A", "B", "C"]);
        assert_eq!(selection.toggle("A"), SelectionResult::Removed);
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.toggle("D"), SelectionResult::Added);
        assert_eq!(selection.ids(), ["B", "C", "D"]);
    }

    #[test]
    fn hydrate_skips_duplicates_and_truncates_to_capacity() {
        let selection = SelectionSet::hydrate(2, ["x", "x", "y", "z"]);
        assert_eq!(selection.ids(), ["x", "y"]);
        assert!(selection.is_full());
        assert_eq!(SelectionSet::new(0).capacity(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut selection = SelectionSet::hydrate(4, ["a", "b"]);
        selection.clear();
        assert!(selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn resolve_drops_ids_missing_from_catalog() {
        let catalog = Catalog::new(vec![Package::new("a", "A"), Package::new("b", "B")])
            .expect("catalog");
        let selection = SelectionSet::hydrate(4, ["b", "gone", "a"]);
        let resolved = selection
            .resolve(&catalog)
            .into_iter()
            .map(|package| package.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(resolved, vec!["b", "a"]);
    }

    #[test]
    fn notice_only_for_rejections() {
        let notice = SelectionResult::RejectedAtCapacity
            .notice(4)
            .expect("notice for rejection");
        assert!(notice.contains("up to 4 packages"));
        assert_eq!(SelectionResult::Added.notice(4), None);
        assert!(!SelectionResult::RejectedAtCapacity.changed());
    }

    proptest! {
        #[test]
        fn property_capacity_holds_after_every_toggle(
            capacity in 1usize..6,
            toggles in prop::collection::vec(0u8..10, 0..64),
        ) {
            let mut selection = SelectionSet::new(capacity);
            for raw in toggles {
                let id = format!("pkg-{raw}");
                let before = selection.len();
                let result = selection.toggle(&id);
                prop_assert!(selection.len() <= capacity);
                if result == SelectionResult::RejectedAtCapacity {
                    prop_assert_eq!(selection.len(), before);
                }
            }
        }

        #[test]
        fn property_successful_toggle_twice_restores_membership(
            seed in prop::collection::vec(0u8..8, 0..4),
            target in 0u8..8,
        ) {
            let mut selection = SelectionSet::hydrate(4, seed.iter().map(|raw| format!("pkg-{raw}")));
            let id = format!("pkg-{target}");
            let was_member = selection.contains(&id);
            let first = selection.toggle(&id);
            prop_assume!(first.changed());
            selection.toggle(&id);
            prop_assert_eq!(selection.contains(&id), was_member);
        }
    }
}
