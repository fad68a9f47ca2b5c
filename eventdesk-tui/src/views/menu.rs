//! Main menu view - the landing view.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;

/// The main menu listing every section.
#[derive(Debug, Clone, Default)]
pub struct MenuView;

impl ViewRenderer for MenuView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        // Title bar
        let title = Paragraph::new("Welcome to the events portal")
            .style(Style::default().fg(app.theme.fg))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        frame.render_widget(title, chunks[0]);

        // Section list
        let list = app.menu_widget.to_list(&app.theme);
        frame.render_widget(list, chunks[1]);
    }

    fn title(&self) -> &str {
        "Main menu"
    }
}
