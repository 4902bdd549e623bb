//! src/view/theme.rs
//! ============================================================================
//! # Viewer Color Palette
//!
//! Dark palette matching the original viewer's charcoal/amber look.

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(26, 26, 26); // #1a1a1a
pub const PANEL: Color = Color::Rgb(42, 42, 42); // #2a2a2a
pub const FOREGROUND: Color = Color::White;
pub const MUTED: Color = Color::Rgb(170, 170, 170); // #aaa
pub const ACCENT: Color = Color::Rgb(255, 136, 0); // #ff8800
pub const GREEN: Color = Color::Rgb(166, 227, 161);
pub const YELLOW: Color = Color::Rgb(249, 226, 175);
pub const RED: Color = Color::Rgb(243, 139, 168);

pub fn header_style() -> Style {
    Style::default()
        .fg(FOREGROUND)
        .bg(PANEL)
        .add_modifier(Modifier::BOLD)
}

pub fn label_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn input_style() -> Style {
    Style::default().fg(FOREGROUND).bg(Color::Rgb(51, 51, 51))
}

pub fn input_focused_style() -> Style {
    Style::default().fg(FOREGROUND).bg(Color::Rgb(51, 51, 51))
}

pub fn input_focused_border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn input_border_style() -> Style {
    Style::default().fg(Color::Rgb(68, 68, 68))
}

pub fn cursor_row_style() -> Style {
    Style::default()
        .bg(ACCENT)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default().fg(FOREGROUND).bg(PANEL)
}

pub fn footer_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}
