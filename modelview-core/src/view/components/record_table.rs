//! src/view/components/record_table.rs
//! ============================================================================
//! # RecordTable: Model Catalog Table Component
//!
//! Renders the visible record subset as a three-column table with a sort
//! indicator on the active column header and a row cursor highlight. The
//! table renders purely from the engine's visible set; it never re-filters.

use crate::model::app_state::AppState;
use crate::model::catalog_state::SortKey;
use crate::view::theme;

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, TableState},
};

/// Fixed widths for the trailing columns; the name column takes the rest.
const TYPE_WIDTH: u16 = 24;
const SUBTYPE_WIDTH: u16 = 16;
const COLUMN_SPACING: u16 = 1;

pub struct RecordTable;

impl RecordTable {
    pub fn render(frame: &mut Frame<'_>, app: &mut AppState, area: Rect) {
        // Remember where we drew so header clicks can be mapped back.
        app.ui.table_area = area;
        app.ui.viewport_rows = area.height.saturating_sub(1).max(1) as usize;

        let header: Row<'_> = Row::new(vec![
            Self::header_label(app, SortKey::Name),
            Self::header_label(app, SortKey::Type),
            Self::header_label(app, SortKey::Subtype),
        ])
        .style(theme::header_style());

        let rows = app.catalog.visible().iter().map(|record| {
            Row::new(vec![
                Cell::from(record.display_name.clone()),
                Cell::from(record.model_type.clone()),
                Cell::from(record.model_subtype.clone()),
            ])
        });

        let widths: [Constraint; 3] = [
            Constraint::Min(20),
            Constraint::Length(TYPE_WIDTH),
            Constraint::Length(SUBTYPE_WIDTH),
        ];

        let table: Table<'_> = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::cursor_row_style())
            .column_spacing(COLUMN_SPACING);

        let mut table_state: TableState = app.catalog.table_state.clone();
        frame.render_stateful_widget(table, area, &mut table_state);
        app.catalog.table_state = table_state;
    }

    /// Column title plus the legacy direction indicator on the active sort
    /// column: `▼` while ascending, `▲` while descending.
    fn header_label(app: &AppState, key: SortKey) -> String {
        let title: &str = match key {
            SortKey::Name => "Model",
            SortKey::Type => "Type",
            SortKey::Subtype => "Base Model",
        };

        if app.catalog.sort_key == key {
            let indicator: &str = if app.catalog.sort_descending {
                " ▲"
            } else {
                " ▼"
            };
            format!("{title}{indicator}")
        } else {
            title.to_string()
        }
    }

    /// Map a click x-coordinate inside `area` to the column under it, using
    /// the same width rules the renderer uses.
    #[must_use]
    pub fn column_at(area: Rect, x: u16) -> Option<SortKey> {
        if x < area.x || x >= area.x + area.width {
            return None;
        }

        let rel: u16 = x - area.x;
        let name_width: u16 = area
            .width
            .saturating_sub(TYPE_WIDTH + SUBTYPE_WIDTH + 2 * COLUMN_SPACING);

        if rel < name_width {
            Some(SortKey::Name)
        } else if rel < name_width + COLUMN_SPACING + TYPE_WIDTH {
            Some(SortKey::Type)
        } else {
            Some(SortKey::Subtype)
        }
    }

    /// True when the given screen position is on the header row of `area`.
    #[must_use]
    pub fn is_header_row(area: Rect, y: u16) -> bool {
        area.height > 0 && y == area.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_mapping_covers_all_three_columns() {
        let area = Rect::new(0, 5, 120, 30);
        let name_width = 120 - (24 + 16 + 2);

        assert_eq!(RecordTable::column_at(area, 0), Some(SortKey::Name));
        assert_eq!(
            RecordTable::column_at(area, name_width - 1),
            Some(SortKey::Name)
        );
        assert_eq!(
            RecordTable::column_at(area, name_width + 1),
            Some(SortKey::Type)
        );
        assert_eq!(RecordTable::column_at(area, 119), Some(SortKey::Subtype));
        assert_eq!(RecordTable::column_at(area, 120), None);
    }

    #[test]
    fn header_row_is_the_first_table_row() {
        let area = Rect::new(0, 5, 120, 30);
        assert!(RecordTable::is_header_row(area, 5));
        assert!(!RecordTable::is_header_row(area, 6));
    }
}
