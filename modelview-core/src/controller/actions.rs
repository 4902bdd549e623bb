//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all meaningful user inputs the
//! viewer responds to. Raw terminal events are translated into these by the
//! `Controller`, keyed on the current focus.

use crate::model::catalog_state::SortKey;
use crate::model::ui_state::FilterField;

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the focused filter box.
    FilterInput(FilterField, char),

    /// Remove the last character from the focused filter box.
    FilterBackspace(FilterField),

    /// Move focus to the first filter box (hotkey: f).
    FocusFirstFilter,

    /// Cycle focus forward (Tab).
    FocusNext,

    /// Cycle focus backward (Shift-Tab).
    FocusPrev,

    /// Return focus to the table (Esc/Enter in a filter box).
    FocusTable,

    /// Generate symlink commands for the visible set (hotkey: s).
    GenerateSymlinks,

    /// Move the row cursor down.
    MoveSelectionDown,

    /// Move the row cursor up.
    MoveSelectionUp,

    /// No state change needed for this event.
    NoOp,

    /// Page the row cursor down.
    PageDown,

    /// Page the row cursor up.
    PageUp,

    /// Quit the application.
    Quit,

    /// Reload the record snapshot from the store (F5).
    ReloadStore,

    /// Clear all filters (hotkey: r).
    ResetFilters,

    /// A terminal resize event.
    Resize(u16, u16),

    /// Jump the cursor to the first row.
    SelectFirst,

    /// Jump the cursor to the last row.
    SelectLast,

    /// Column-header activation for sorting.
    SortColumn(SortKey),
}
