//! src/view/components/filter_bar.rs
//! ============================================================================
//! # FilterBar: Three Labeled Filter Inputs
//!
//! Renders the Model / Type / Base Model filter boxes in one horizontal row.
//! The focused box gets an accent border and shows a trailing cursor block.

use crate::model::app_state::AppState;
use crate::model::ui_state::{FilterField, Focus};
use crate::view::theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct FilterBar;

impl FilterBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        // label, input, label, input, label, input
        let chunks: Vec<Rect> = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Fill(2),
                Constraint::Length(9),
                Constraint::Fill(1),
                Constraint::Length(12),
                Constraint::Fill(1),
            ])
            .split(area)
            .to_vec();

        let boxes: [(FilterField, Focus); 3] = [
            (FilterField::Name, Focus::FilterName),
            (FilterField::Type, Focus::FilterType),
            (FilterField::Subtype, Focus::FilterSubtype),
        ];

        for (i, (field, focus)) in boxes.into_iter().enumerate() {
            let label = Paragraph::new(Line::from(Span::styled(
                format!("{}:", field.label()),
                theme::label_style(),
            )))
            .alignment(ratatui::layout::Alignment::Right);
            frame.render_widget(label, chunks[i * 2]);

            Self::render_input(frame, app, field, app.ui.focus == focus, chunks[i * 2 + 1]);
        }
    }

    fn render_input(
        frame: &mut Frame<'_>,
        app: &AppState,
        field: FilterField,
        focused: bool,
        area: Rect,
    ) {
        let text: &str = app.ui.input_for(field);

        let (style, border_style) = if focused {
            (
                theme::input_focused_style(),
                theme::input_focused_border_style(),
            )
        } else {
            (theme::input_style(), theme::input_border_style())
        };

        let mut spans: Vec<Span<'_>> = vec![Span::styled(text.to_string(), style)];
        if focused {
            spans.push(Span::styled("█", theme::input_focused_border_style()));
        } else if text.is_empty() {
            spans = vec![Span::styled("filter...", theme::footer_style())];
        }

        let input = Paragraph::new(Line::from(spans)).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, area);
    }
}
