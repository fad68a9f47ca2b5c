//! Main menu list widget.
//!
//! Displays the portal sections with their hotkeys and supports
//! wrapping keyboard selection.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::Theme;
use crate::panels::Section;

/// Widget displaying the selectable list of sections.
#[derive(Debug, Clone)]
pub struct MenuListWidget {
    pub entries: Vec<Section>,
    pub selected: usize,
}

impl MenuListWidget {
    /// Creates the menu with every section in menu order.
    pub fn new() -> Self {
        Self {
            entries: Section::ALL.to_vec(),
            selected: 0,
        }
    }

    /// Moves selection to the next item, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    /// Moves selection to the previous item, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.entries.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// The currently selected section.
    pub fn selected_section(&self) -> Option<Section> {
        self.entries.get(self.selected).copied()
    }

    /// Converts the widget to a renderable List with the given theme.
    pub fn to_list(&self, theme: &Theme) -> List<'_> {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if i == self.selected {
                    Style::default().fg(theme.highlight).bg(theme.selection)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}  ", i + 1), Style::default().fg(theme.accent)),
                    Span::styled(section.title(), style),
                ]))
            })
            .collect();

        let block = Block::default()
            .title(" Main menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        List::new(items).block(block)
    }
}

impl Default for MenuListWidget {
    fn default() -> Self {
        Self::new()
    }
}
