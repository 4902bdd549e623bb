//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: Interaction State for the Catalog Viewer
//!
//! Tracks ephemeral UI state: which widget has focus, the raw text of the
//! three filter boxes, and the notification shown on the status line. The
//! filter text here is the user-facing form; the engine keeps its own
//! lowercased copy.

/// The three filterable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Type,
    Subtype,
}

impl FilterField {
    /// Label shown next to the filter box.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Model",
            Self::Type => "Type",
            Self::Subtype => "Base Model",
        }
    }
}

/// Focus targets, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    FilterName,
    FilterType,
    FilterSubtype,
    #[default]
    Table,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::FilterName => Self::FilterType,
            Self::FilterType => Self::FilterSubtype,
            Self::FilterSubtype => Self::Table,
            Self::Table => Self::FilterName,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::FilterName => Self::Table,
            Self::FilterType => Self::FilterName,
            Self::FilterSubtype => Self::FilterType,
            Self::Table => Self::FilterSubtype,
        }
    }

    /// Which filter field this focus edits, if any.
    #[must_use]
    pub fn filter_field(self) -> Option<FilterField> {
        match self {
            Self::FilterName => Some(FilterField::Name),
            Self::FilterType => Some(FilterField::Type),
            Self::FilterSubtype => Some(FilterField::Subtype),
            Self::Table => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Status-line message that overrides the default counts display.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

/// Complete interaction state.
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Widget currently receiving key input.
    pub focus: Focus,

    /// Raw filter-box text, indexed by field.
    pub input_name: String,
    pub input_type: String,
    pub input_subtype: String,

    /// Current status-line notification (if any).
    pub notification: Option<Notification>,

    /// Row count the table viewport can show, updated on render.
    pub viewport_rows: usize,

    /// Screen rectangle the table occupied last frame; used to map mouse
    /// clicks on the header row back to a column.
    pub table_area: ratatui::layout::Rect,

    /// Set after any state mutation; cleared once the frame is drawn.
    pub redraw: bool,
}

impl UIState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            redraw: true,
            viewport_rows: 20,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input_for(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.input_name,
            FilterField::Type => &self.input_type,
            FilterField::Subtype => &self.input_subtype,
        }
    }

    pub fn input_for_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Name => &mut self.input_name,
            FilterField::Type => &mut self.input_type,
            FilterField::Subtype => &mut self.input_subtype,
        }
    }

    pub fn clear_inputs(&mut self) {
        self.input_name.clear();
        self.input_type.clear();
        self.input_subtype.clear();
    }

    // --- Notifications --------------------------------------------------

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Info);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Success);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Warning);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Error);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle_visits_every_target_once() {
        let mut focus = Focus::FilterName;
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            [
                Focus::FilterName,
                Focus::FilterType,
                Focus::FilterSubtype,
                Focus::Table
            ]
        );
        assert_eq!(focus.next(), Focus::FilterName);
        assert_eq!(Focus::FilterName.prev(), Focus::Table);
    }

    #[test]
    fn table_focus_edits_no_filter() {
        assert_eq!(Focus::Table.filter_field(), None);
        assert_eq!(Focus::FilterType.filter_field(), Some(FilterField::Type));
    }
}
