//! Theme system for the eventdesk TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles needed to render the interface
/// consistently across views and widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,
    pub highlight: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Creates the default eventdesk theme.
///
/// Muted slate background with a cool blue accent, tuned for dark
/// terminals.
pub fn desk_default() -> Theme {
    let fg = Color::Rgb(192, 202, 245); // #c0caf5

    Theme {
        name: "desk".into(),

        // Base colors
        bg: Color::Rgb(26, 27, 38), // #1a1b26
        fg,
        accent: Color::Rgb(122, 162, 247),  // #7aa2f7
        success: Color::Rgb(158, 206, 106), // #9ece6a
        warning: Color::Rgb(224, 175, 104), // #e0af68
        error: Color::Rgb(247, 118, 142),   // #f7768e

        // UI element colors
        border: Color::Rgb(59, 66, 97),      // #3b4261
        selection: Color::Rgb(40, 52, 87),   // #283457
        highlight: Color::Rgb(125, 207, 255), // #7dcfff

        // Text styles
        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

/// Creates a high-contrast theme using only ANSI colors.
pub fn high_contrast() -> Theme {
    Theme {
        name: "contrast".into(),

        bg: Color::Black,
        fg: Color::White,
        accent: Color::Yellow,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,

        border: Color::White,
        selection: Color::Blue,
        highlight: Color::Cyan,

        bold: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(Color::Gray),
    }
}

/// Looks up a theme by name, `None` for unknown names.
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name {
        "desk" => Some(desk_default()),
        "contrast" => Some(high_contrast()),
        _ => None,
    }
}
