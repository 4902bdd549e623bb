//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Top-Level Application State
//!
//! Unifies the catalog engine, interaction state, and the two I/O boundaries
//! (store, clipboard) behind the operations the controller dispatches. Every
//! mutation runs synchronously to completion; the viewer has no background
//! work, so a frame always reflects a complete engine state.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::model::catalog_state::{CatalogState, SortKey};
use crate::model::ui_state::{FilterField, UIState};
use crate::store::catalog::ModelStore;
use crate::symlinks;
use clipout::TextSink;

/// Core application state struct.
pub struct AppState {
    pub config: Arc<Config>,
    pub store: ModelStore,
    pub catalog: CatalogState,
    pub ui: UIState,
    pub clipboard: TextSink,
}

impl AppState {
    /// Construct state around a loaded configuration. No store I/O yet.
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        let store: ModelStore = ModelStore::new(config.database_path());

        Self {
            config,
            store,
            catalog: CatalogState::new(),
            ui: UIState::new(),
            clipboard: TextSink::new(),
        }
    }

    /// Load (or reload) the record snapshot from the store.
    ///
    /// A failed load keeps the app running with an empty table and an error
    /// on the status line; no partial data is ever shown.
    pub fn load_records(&mut self) {
        match self.store.load_all() {
            Ok(records) => {
                self.catalog.set_records(records);
                self.ui.dismiss_notification();
            }
            Err(e) => {
                warn!("store load failed: {e}");
                self.catalog.clear_records();
                self.ui.show_error(format!("Error loading models: {e}"));
            }
        }
        self.ui.redraw = true;
    }

    /// Append one character to the filter box the user is typing into.
    pub fn filter_push(&mut self, field: FilterField, c: char) {
        self.ui.input_for_mut(field).push(c);
        self.apply_filter(field);
    }

    /// Remove the last character from a filter box.
    pub fn filter_pop(&mut self, field: FilterField) {
        self.ui.input_for_mut(field).pop();
        self.apply_filter(field);
    }

    /// Column-header activation: toggle or switch the sort column.
    pub fn sort_by(&mut self, column: SortKey) {
        self.catalog.set_sort_column(column);
        self.ui.dismiss_notification();
        self.ui.redraw = true;
    }

    /// Clear all filters (boxes and engine); sort state is kept.
    pub fn reset_filters(&mut self) {
        self.ui.clear_inputs();
        self.catalog.reset();
        self.ui.show_info("Filters reset");
        self.ui.redraw = true;
    }

    /// Generate symlink commands for the visible set and push the joined
    /// text to the clipboard. Every failure is a status message; prior
    /// state stays intact.
    pub fn generate_symlinks(&mut self) {
        match symlinks::generate(self.catalog.visible(), &self.config.data_dir) {
            Ok(commands) => {
                let count: usize = commands.len();
                let blob: String = commands.join("\n");

                match self.clipboard.write_text(&blob) {
                    Ok(()) => {
                        info!("copied {count} symlink commands to clipboard");
                        let plural: &str = if count > 1 { "s" } else { "" };
                        self.ui.show_success(format!(
                            "Copied {count} symlink command{plural} to clipboard"
                        ));
                    }
                    Err(e) => {
                        warn!("clipboard write failed: {e}");
                        self.ui.show_error(format!("Failed to copy to clipboard: {e}"));
                    }
                }
            }
            Err(e) => {
                self.ui.show_warning(e.to_string());
            }
        }
        self.ui.redraw = true;
    }

    fn apply_filter(&mut self, field: FilterField) {
        let pattern: String = self.ui.input_for(field).to_string();
        self.catalog.set_filter(field, &pattern);
        self.ui.dismiss_notification();
        self.ui.redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::ModelRecord;
    use std::path::PathBuf;

    fn state_with(records: Vec<ModelRecord>) -> AppState {
        let config = Arc::new(Config {
            data_dir: PathBuf::from("/data"),
        });
        let mut state = AppState::new(config);
        state.catalog.set_records(records);
        state
    }

    fn rec(name: &str, model_type: &str) -> ModelRecord {
        ModelRecord::from_raw(
            Some(name.to_string()),
            Some(model_type.to_string()),
            None,
            None,
            Some(format!("u/{name}.pt")),
        )
    }

    #[test]
    fn typing_into_a_filter_box_narrows_the_table() {
        let mut state = state_with(vec![rec("foo", "lora"), rec("bar", "main")]);

        for c in "lo".chars() {
            state.filter_push(FilterField::Type, c);
        }
        assert_eq!(state.catalog.visible_count(), 1);
        assert_eq!(state.catalog.visible()[0].display_name, "foo.pt");

        state.filter_pop(FilterField::Type);
        state.filter_pop(FilterField::Type);
        assert_eq!(state.catalog.visible_count(), 2);
    }

    #[test]
    fn reset_clears_boxes_and_engine_together() {
        let mut state = state_with(vec![rec("foo", "lora"), rec("bar", "main")]);
        state.filter_push(FilterField::Name, 'f');
        assert_eq!(state.catalog.visible_count(), 1);

        state.reset_filters();
        assert!(state.ui.input_name.is_empty());
        assert_eq!(state.catalog.visible_count(), 2);
        assert!(state.ui.notification.is_some());
    }

    #[test]
    fn symlink_generation_with_nothing_visible_warns() {
        let mut state = state_with(vec![]);
        state.generate_symlinks();

        let note = state.ui.notification.expect("status message expected");
        assert_eq!(note.message, "No models to generate symlinks for");
    }
}
