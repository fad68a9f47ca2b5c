//! Participation criteria view.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;

const CRITERIA: [&str; 5] = [
    "Registration is open to members and first-time visitors.",
    "Sign up closes on the Thursday before each event.",
    "Workshop places are assigned in order of confirmation.",
    "Under-16s must be accompanied by a registered adult.",
    "Cancellations after the deadline release the place to the waiting list.",
];

/// The participation criteria section.
#[derive(Debug, Clone, Default)]
pub struct CriteriaView;

impl ViewRenderer for CriteriaView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let lines: Vec<Line> = CRITERIA
            .iter()
            .map(|text| Line::styled(format!("- {}", text), Style::default().fg(app.theme.fg)))
            .collect();

        let block = Block::default()
            .title(" Participation criteria ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }

    fn title(&self) -> &str {
        "Participation criteria"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_view_has_correct_title() {
        let view = CriteriaView;
        assert_eq!(view.title(), "Participation criteria");
    }
}
