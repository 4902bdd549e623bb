//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! One draw cycle lays out the filter bar, the record table, the status line,
//! and the keymap footer. Rendering reads only the engine's visible set and
//! status fields; it never reaches into engine internals or re-filters.

use crate::model::app_state::AppState;
use crate::view::components::{filter_bar::FilterBar, record_table::RecordTable, status_bar::StatusBar};
use crate::view::theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

pub struct View;

impl View {
    /// Draws the full UI for one frame; to be called in the
    /// `terminal.draw(|frame| ...)` callback.
    pub fn redraw(frame: &mut Frame<'_>, app: &mut AppState) {
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // filter bar
                Constraint::Min(2),    // record table
                Constraint::Length(1), // status line
                Constraint::Length(1), // keymap footer
            ])
            .split(frame.area())
            .to_vec();

        FilterBar::render(frame, app, chunks[0]);
        RecordTable::render(frame, app, chunks[1]);
        StatusBar::render(frame, app, chunks[2]);
        Self::render_footer(frame, chunks[3]);
    }

    fn render_footer(frame: &mut Frame<'_>, area: Rect) {
        let keymap: String = [
            "[q] Quit",
            "[f] Filter",
            "[r] Reset",
            "[s] Symlinks",
            "[F5] Reload",
            "[Tab] Focus",
            "[1/2/3] Sort",
        ]
        .join("   ");

        frame.render_widget(Paragraph::new(keymap).style(theme::footer_style()), area);
    }
}
