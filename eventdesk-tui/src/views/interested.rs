//! Interested parties view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::traits::ViewRenderer;
use crate::{App, Theme};

/// Sign-up entries with their confirmation state.
const SIGNUPS: [(&str, &str); 5] = [
    ("Ana Souza", "confirmed"),
    ("Carlos Lima", "confirmed"),
    ("Beatriz Rocha", "waiting"),
    ("Daniel Alves", "waiting"),
    ("Fernanda Costa", "declined"),
];

/// The interested-parties section.
#[derive(Debug, Clone, Default)]
pub struct InterestedView;

fn status_color(status: &str, theme: &Theme) -> Color {
    match status {
        "confirmed" => theme.success,
        "waiting" => theme.warning,
        "declined" => theme.error,
        _ => theme.fg,
    }
}

impl ViewRenderer for InterestedView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let items: Vec<ListItem> = SIGNUPS
            .iter()
            .map(|(name, status)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<20}", name), Style::default().fg(app.theme.fg)),
                    Span::styled(
                        *status,
                        Style::default().fg(status_color(status, &app.theme)),
                    ),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(" Interested parties ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));

        frame.render_widget(List::new(items).block(block), area);
    }

    fn title(&self) -> &str {
        "Interested parties"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk_default;

    #[test]
    fn interested_view_has_correct_title() {
        let view = InterestedView;
        assert_eq!(view.title(), "Interested parties");
    }

    #[test]
    fn status_colors_match_semantic_meaning() {
        let theme = desk_default();
        assert_eq!(status_color("confirmed", &theme), theme.success);
        assert_eq!(status_color("waiting", &theme), theme.warning);
        assert_eq!(status_color("declined", &theme), theme.error);
        assert_eq!(status_color("other", &theme), theme.fg);
    }
}
