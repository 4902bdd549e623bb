//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Counts, Store Location, and Notifications
//!
//! Default form reports how many records pass the filters and where the
//! backing store lives. An active notification replaces the counts with a
//! level-colored message until the next filter or sort change dismisses it.

use crate::model::app_state::AppState;
use crate::model::ui_state::NotificationLevel;
use crate::view::theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let (text, style): (String, Style) = match &app.ui.notification {
            Some(note) => {
                let color = match note.level {
                    NotificationLevel::Info => theme::FOREGROUND,
                    NotificationLevel::Success => theme::GREEN,
                    NotificationLevel::Warning => theme::YELLOW,
                    NotificationLevel::Error => theme::RED,
                };
                (
                    note.message.clone(),
                    theme::status_style().fg(color),
                )
            }
            None => (Self::counts_line(app), theme::status_style()),
        };

        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    fn counts_line(app: &AppState) -> String {
        let total: usize = app.catalog.total_count();
        let visible: usize = app.catalog.visible_count();
        let store = app.store.db_path().display();

        if visible == total {
            format!("Showing all {total} models | Store: {store}")
        } else {
            format!("Showing {visible} of {total} models | Store: {store}")
        }
    }
}
