//! Status bar widget.
//!
//! A single line at the top of the screen showing the current
//! location and the key hints that apply there.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::Theme;
use crate::panels::View;

/// Widget displaying the current location and key hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBarWidget {
    pub view: View,
}

impl StatusBarWidget {
    /// Creates a status bar for the given view.
    pub fn new(view: View) -> Self {
        Self { view }
    }

    /// Display text for the current location.
    pub fn location(&self) -> &'static str {
        match self.view {
            View::Menu => "Main menu",
            View::Section(section) => section.title(),
            View::Blank => "No section",
        }
    }

    /// Key hints for the current location.
    pub fn hints(&self) -> &'static str {
        match self.view {
            View::Menu => "j/k move   Enter open   e/i/c jump   : command   q quit",
            View::Section(_) => "Esc menu   e/i/c jump   : command   q quit",
            View::Blank => "Esc menu   : command   q quit",
        }
    }

    /// Converts the widget to a renderable Paragraph with the given theme.
    ///
    /// The paragraph owns no borrowed text, so it may outlive the
    /// widget; callers can build it from a temporary.
    pub fn to_paragraph(&self, theme: &Theme) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("eventdesk", theme.bold),
            Span::raw("  "),
            Span::styled(self.location(), Style::default().fg(theme.accent)),
            Span::raw("   "),
            Span::styled(self.hints(), theme.dim),
        ]);

        Paragraph::new(line)
    }
}
