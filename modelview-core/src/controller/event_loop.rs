//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Terminal Event Translation and Synchronous Dispatch
//!
//! The Controller owns the crossterm event stream, translates raw terminal
//! events into [`Action`]s keyed on the current focus, and applies each
//! action against `AppState` to completion before the next event is read.
//! There is no background work; every transition is atomic end-to-end.

use std::sync::Arc;

use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::layout::Rect;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::controller::actions::Action;
use crate::model::app_state::AppState;
use crate::model::catalog_state::SortKey;
use crate::model::ui_state::{FilterField, Focus};
use crate::view::components::record_table::RecordTable;

/// Controller struct: owns the terminal event source and the app handle.
pub struct Controller {
    pub app: Arc<Mutex<AppState>>,
    events: EventStream,
}

impl Controller {
    #[must_use]
    pub fn new(app: Arc<Mutex<AppState>>) -> Self {
        Self {
            app,
            events: EventStream::new(),
        }
    }

    /// Wait for the next terminal event and translate it into an action.
    /// Returns `None` when the event stream ends.
    pub async fn next_action(&mut self) -> Option<Action> {
        loop {
            let event: TermEvent = match self.events.next().await? {
                Ok(event) => event,
                Err(e) => {
                    warn!("terminal event error: {e}");
                    continue;
                }
            };

            let (focus, table_area) = {
                let app = self.app.lock().await;
                (app.ui.focus, app.ui.table_area)
            };

            let action: Action = Self::translate(focus, table_area, event);
            if action != Action::NoOp {
                return Some(action);
            }
        }
    }

    /// Apply one action against the shared state, synchronously.
    pub async fn dispatch_action(&self, action: Action) {
        debug!("dispatch {action:?}");
        let mut app = self.app.lock().await;

        match action {
            Action::FilterInput(field, c) => app.filter_push(field, c),
            Action::FilterBackspace(field) => app.filter_pop(field),
            Action::FocusFirstFilter => Self::set_focus(&mut app, Focus::FilterName),
            Action::FocusNext => {
                let next = app.ui.focus.next();
                Self::set_focus(&mut app, next);
            }
            Action::FocusPrev => {
                let prev = app.ui.focus.prev();
                Self::set_focus(&mut app, prev);
            }
            Action::FocusTable => Self::set_focus(&mut app, Focus::Table),
            Action::GenerateSymlinks => app.generate_symlinks(),
            Action::MoveSelectionDown => {
                app.catalog.move_selection_down();
                app.ui.redraw = true;
            }
            Action::MoveSelectionUp => {
                app.catalog.move_selection_up();
                app.ui.redraw = true;
            }
            Action::PageDown => {
                let page: usize = app.ui.viewport_rows;
                app.catalog.page_down(page);
                app.ui.redraw = true;
            }
            Action::PageUp => {
                let page: usize = app.ui.viewport_rows;
                app.catalog.page_up(page);
                app.ui.redraw = true;
            }
            Action::ReloadStore => app.load_records(),
            Action::ResetFilters => app.reset_filters(),
            Action::Resize(_, _) => app.ui.redraw = true,
            Action::SelectFirst => {
                app.catalog.select_first();
                app.ui.redraw = true;
            }
            Action::SelectLast => {
                app.catalog.select_last();
                app.ui.redraw = true;
            }
            Action::SortColumn(column) => app.sort_by(column),
            Action::NoOp | Action::Quit => {}
        }
    }

    fn set_focus(app: &mut AppState, focus: Focus) {
        app.ui.focus = focus;
        app.ui.redraw = true;
    }

    /// Raw terminal event → action, keyed on the current focus.
    #[must_use]
    pub fn translate(focus: Focus, table_area: Rect, event: TermEvent) -> Action {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => match focus.filter_field() {
                Some(field) => Self::translate_filter_key(field, key),
                None => Self::translate_table_key(key),
            },
            TermEvent::Mouse(mouse) => Self::translate_mouse(table_area, mouse),
            TermEvent::Resize(w, h) => Action::Resize(w, h),
            _ => Action::NoOp,
        }
    }

    /// Keys while a filter box is focused: free text plus focus movement.
    fn translate_filter_key(field: FilterField, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => Action::FilterInput(field, c),
            KeyCode::Backspace => Action::FilterBackspace(field),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Esc | KeyCode::Enter => Action::FocusTable,
            _ => Action::NoOp,
        }
    }

    /// Keys while the table is focused: hotkeys and cursor movement.
    fn translate_table_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('f') => Action::FocusFirstFilter,
            KeyCode::Char('r') => Action::ResetFilters,
            KeyCode::Char('s') => Action::GenerateSymlinks,
            KeyCode::Char('1') => Action::SortColumn(SortKey::Name),
            KeyCode::Char('2') => Action::SortColumn(SortKey::Type),
            KeyCode::Char('3') => Action::SortColumn(SortKey::Subtype),
            KeyCode::F(5) => Action::ReloadStore,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Up => Action::MoveSelectionUp,
            KeyCode::Down => Action::MoveSelectionDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Home => Action::SelectFirst,
            KeyCode::End => Action::SelectLast,
            _ => Action::NoOp,
        }
    }

    /// Left click on the table header row activates that column.
    fn translate_mouse(table_area: Rect, mouse: MouseEvent) -> Action {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && RecordTable::is_header_row(table_area, mouse.row)
            && let Some(column) = RecordTable::column_at(table_area, mouse.column)
        {
            return Action::SortColumn(column);
        }

        Action::NoOp
    }
}
