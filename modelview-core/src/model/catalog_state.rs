//! ``src/model/catalog_state.rs``
//! ============================================================================
//! # `CatalogState`: Filter/Sort Engine for the Record Catalog
//!
//! Owns the immutable record snapshot for the session, the three independent
//! substring filters, the active sort key and direction, and the derived
//! visible subset. Recomputation is an explicit operation invoked after every
//! mutator; there is no hidden reactivity. Observers only ever see a complete
//! visible set.

use std::cmp::Ordering;

use ratatui::widgets::TableState;

use crate::model::ui_state::FilterField;
use crate::store::record::ModelRecord;

/// Column a record catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Type,
    Subtype,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'_ str = match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Subtype => "subtype",
        };

        write!(f, "{s}")
    }
}

impl SortKey {
    /// The record field this key orders by.
    #[must_use]
    pub fn field<'a>(&self, record: &'a ModelRecord) -> &'a str {
        match self {
            Self::Name => &record.display_name,
            Self::Type => &record.model_type,
            Self::Subtype => &record.model_subtype,
        }
    }
}

/// Filter and sort state plus the derived visible subset.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Immutable snapshot of all records for the session.
    all_records: Vec<ModelRecord>,

    /// Lowercase substring filter on the display name. Empty = no constraint.
    pub filter_name: String,

    /// Lowercase substring filter on the model type.
    pub filter_type: String,

    /// Lowercase substring filter on the model subtype.
    pub filter_subtype: String,

    /// Column currently ordering the visible set.
    pub sort_key: SortKey,

    /// Direction flag. NOTE: the rendered indicator is intentionally the
    /// inverse of what this name suggests on first render (`▼` while the
    /// comparison is ascending); the toggle behavior is the contract, the
    /// indicator glyphs follow the legacy rendering.
    pub sort_descending: bool,

    /// Derived subset in current filter/sort order.
    visible: Vec<ModelRecord>,

    /// Row cursor into `visible`.
    pub selected: Option<usize>,

    /// Table state for the ratatui Table widget (selection, scroll).
    pub table_state: TableState,
}

impl CatalogState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session snapshot (initial load or explicit reload) and
    /// recompute the visible set against the current filters.
    pub fn set_records(&mut self, records: Vec<ModelRecord>) {
        self.all_records = records;
        self.recompute();
    }

    /// Drop all records, e.g. after a failed reload. Filters are kept.
    pub fn clear_records(&mut self) {
        self.all_records.clear();
        self.recompute();
    }

    #[must_use]
    pub fn all_records(&self) -> &[ModelRecord] {
        &self.all_records
    }

    #[must_use]
    pub fn visible(&self) -> &[ModelRecord] {
        &self.visible
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.all_records.len()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Update the named filter to the lowercase form of `pattern` and
    /// recompute. Empty patterns match everything for that field.
    pub fn set_filter(&mut self, field: FilterField, pattern: &str) {
        let lowered: String = pattern.to_lowercase();
        match field {
            FilterField::Name => self.filter_name = lowered,
            FilterField::Type => self.filter_type = lowered,
            FilterField::Subtype => self.filter_subtype = lowered,
        }
        self.recompute();
    }

    /// Column-header activation. Clicking the active column reverses the
    /// order; clicking a different column always starts ascending.
    pub fn set_sort_column(&mut self, column: SortKey) {
        if self.sort_key == column {
            self.sort_descending = !self.sort_descending;
        } else {
            self.sort_key = column;
            self.sort_descending = false;
        }
        self.recompute();
    }

    /// Clear all three filters and recompute. Sort state is untouched.
    pub fn reset(&mut self) {
        self.filter_name.clear();
        self.filter_type.clear();
        self.filter_subtype.clear();
        self.recompute();
    }

    /// Derive `visible` from (`all_records`, filters, sort) as a pure
    /// function of the inputs. All three predicates are ANDed; the sort is
    /// stable and case-insensitive, comparator reversed when descending so
    /// ties keep their filtered order either way.
    pub fn recompute(&mut self) {
        let mut filtered: Vec<ModelRecord> = self
            .all_records
            .iter()
            .filter(|r| {
                contains_ci(&r.display_name, &self.filter_name)
                    && contains_ci(&r.model_type, &self.filter_type)
                    && contains_ci(&r.model_subtype, &self.filter_subtype)
            })
            .cloned()
            .collect();

        let key: SortKey = self.sort_key;
        let descending: bool = self.sort_descending;
        filtered.sort_by(|a: &ModelRecord, b: &ModelRecord| -> Ordering {
            let ord: Ordering = key
                .field(a)
                .to_lowercase()
                .cmp(&key.field(b).to_lowercase());
            if descending { ord.reverse() } else { ord }
        });

        self.visible = filtered;
        self.clamp_selection();
    }

    // --- Row cursor -----------------------------------------------------

    pub fn move_selection_up(&mut self) {
        if let Some(selected) = self.selected
            && selected > 0
        {
            self.select(Some(selected - 1));
        }
    }

    pub fn move_selection_down(&mut self) {
        if let Some(selected) = self.selected
            && selected + 1 < self.visible.len()
        {
            self.select(Some(selected + 1));
        }
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.select(Some(self.visible.len() - 1));
        }
    }

    pub fn page_up(&mut self, page: usize) {
        if let Some(selected) = self.selected {
            self.select(Some(selected.saturating_sub(page.max(1))));
        }
    }

    pub fn page_down(&mut self, page: usize) {
        if let Some(selected) = self.selected
            && !self.visible.is_empty()
        {
            self.select(Some((selected + page.max(1)).min(self.visible.len() - 1)));
        }
    }

    fn select(&mut self, idx: Option<usize>) {
        self.selected = idx;
        self.table_state.select(idx);
    }

    /// Keep the cursor inside the new visible set after a recompute.
    fn clamp_selection(&mut self) {
        let idx: Option<usize> = if self.visible.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.visible.len() - 1))
        };
        self.select(idx);
    }
}

/// Case-insensitive substring test; an empty pattern matches everything.
/// Patterns are stored lowercased already, so only the haystack is lowered.
fn contains_ci(haystack: &str, lowered_pattern: &str) -> bool {
    lowered_pattern.is_empty() || haystack.to_lowercase().contains(lowered_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, model_type: &str, subtype: &str, path: &str) -> ModelRecord {
        ModelRecord::from_raw(
            Some(name.to_string()),
            Some(model_type.to_string()),
            Some(subtype.to_string()),
            None,
            if path.is_empty() {
                None
            } else {
                Some(path.to_string())
            },
        )
    }

    fn fixture() -> CatalogState {
        let mut state = CatalogState::new();
        state.set_records(vec![
            rec("Alpha", "lora", "sdxl", "a/alpha.pt"),
            rec("bravo", "main", "sd1", "b/bravo.pt"),
            rec("Charlie", "lora", "sd1", ""),
            rec("delta", "vae", "sdxl", "d/delta.pt"),
        ]);
        state
    }

    fn names(state: &CatalogState) -> Vec<&str> {
        state
            .visible()
            .iter()
            .map(|r| r.display_name.as_str())
            .collect()
    }

    #[test]
    fn empty_filters_yield_full_set() {
        let state = fixture();
        assert_eq!(state.visible_count(), state.total_count());
    }

    #[test]
    fn visible_is_always_a_subset_of_all() {
        let mut state = fixture();
        state.set_filter(FilterField::Type, "lora");
        for r in state.visible() {
            assert!(state.all_records().contains(r));
        }
        assert!(state.visible_count() <= state.total_count());
    }

    #[test]
    fn filters_are_case_insensitive_and_conjunctive() {
        let mut state = fixture();
        state.set_filter(FilterField::Name, "A.PT");
        assert_eq!(names(&state), ["Alpha.pt", "delta.pt"]);

        // AND, never OR: every predicate must hold independently.
        state.set_filter(FilterField::Subtype, "sdxl");
        assert_eq!(names(&state), ["Alpha.pt", "delta.pt"]);
        state.set_filter(FilterField::Type, "vae");
        assert_eq!(names(&state), ["delta.pt"]);
    }

    #[test]
    fn filter_matches_against_normalized_defaults() {
        let mut state = CatalogState::new();
        state.set_records(vec![ModelRecord::from_raw(None, None, None, None, None)]);
        state.set_filter(FilterField::Type, "unknown");
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn sort_toggle_contract() {
        let mut state = fixture();

        // New column starts ascending.
        state.set_sort_column(SortKey::Type);
        assert!(!state.sort_descending);
        assert_eq!(names(&state), ["Alpha.pt", "Charlie", "bravo.pt", "delta.pt"]);

        // Same column again: descending, ties stable on filtered order.
        state.set_sort_column(SortKey::Type);
        assert!(state.sort_descending);
        assert_eq!(names(&state), ["delta.pt", "bravo.pt", "Alpha.pt", "Charlie"]);

        // Third activation returns to ascending.
        state.set_sort_column(SortKey::Type);
        assert!(!state.sort_descending);
        assert_eq!(names(&state), ["Alpha.pt", "Charlie", "bravo.pt", "delta.pt"]);

        // Switching columns while descending resets to ascending.
        state.set_sort_column(SortKey::Type);
        assert!(state.sort_descending);
        state.set_sort_column(SortKey::Name);
        assert!(!state.sort_descending);
    }

    #[test]
    fn sort_is_case_insensitive() {
        // Default sort is name ascending; mixed-case names interleave.
        let state = fixture();
        assert_eq!(
            names(&state),
            ["Alpha.pt", "bravo.pt", "Charlie", "delta.pt"]
        );
    }

    #[test]
    fn reset_clears_filters_but_not_sort() {
        let mut state = fixture();
        state.set_sort_column(SortKey::Type);
        state.set_sort_column(SortKey::Type);
        state.set_filter(FilterField::Name, "alpha");
        assert_eq!(state.visible_count(), 1);

        state.reset();
        assert_eq!(state.visible_count(), 4);
        assert_eq!(state.sort_key, SortKey::Type);
        assert!(state.sort_descending);

        // Idempotent: a second reset changes nothing.
        let before = state.visible().to_vec();
        state.reset();
        assert_eq!(state.visible(), before.as_slice());
    }

    #[test]
    fn selection_is_clamped_on_recompute() {
        let mut state = fixture();
        state.select_last();
        assert_eq!(state.selected, Some(3));

        state.set_filter(FilterField::Type, "lora");
        assert_eq!(state.selected, Some(1));

        state.set_filter(FilterField::Type, "nothing-matches");
        assert_eq!(state.selected, None);

        state.reset();
        assert_eq!(state.selected, Some(0));
    }
}
