//! Events program view.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::traits::ViewRenderer;
use crate::App;

/// Rows shown in the events program.
const PROGRAM: [(&str, &str); 5] = [
    ("Opening night", "Fri 19:00 - Main hall"),
    ("Workshops", "Sat 09:00 - Rooms 1-4"),
    ("Panel discussion", "Sat 14:00 - Auditorium"),
    ("Community dinner", "Sat 19:30 - Courtyard"),
    ("Closing session", "Sun 10:00 - Main hall"),
];

/// The events program section.
#[derive(Debug, Clone, Default)]
pub struct EventsView;

impl ViewRenderer for EventsView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let items: Vec<ListItem> = PROGRAM
            .iter()
            .map(|(name, slot)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<20}", name), Style::default().fg(app.theme.accent)),
                    Span::styled(*slot, Style::default().fg(app.theme.fg)),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(" Events program ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));

        frame.render_widget(List::new(items).block(block), area);
    }

    fn title(&self) -> &str {
        "Events program"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_view_has_correct_title() {
        let view = EventsView;
        assert_eq!(view.title(), "Events program");
    }
}
