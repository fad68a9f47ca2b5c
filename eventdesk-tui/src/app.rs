//! Main application struct and event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::command::{CommandInput, CommandOutcome, execute_command};
use crate::keybindings::{Action, KeyBindings};
use crate::panels::{PanelSet, Section, View};
use crate::views::{CriteriaView, EventsView, InterestedView, MenuView, ViewRenderer};
use crate::widgets::{MenuListWidget, StatusBarWidget};
use crate::{DeskTerminal, Theme, desk_default, restore_terminal, setup_terminal};

/// The current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Command,
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    /// All panel visibility state; the view switcher core.
    pub panels: PanelSet,
    /// Section list shown on the main menu.
    pub menu_widget: MenuListWidget,
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub mode: Mode,
    /// Command-line input state (`:` mode).
    pub command: CommandInput,
    pub running: bool,
}

impl App {
    /// Creates a new App with default settings.
    pub fn new() -> Self {
        Self::with_theme(desk_default())
    }

    /// Creates a new App with the given theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            panels: PanelSet::new(),
            menu_widget: MenuListWidget::new(),
            keybindings: KeyBindings::default(),
            theme,
            mode: Mode::default(),
            command: CommandInput::default(),
            running: true,
        }
    }

    /// Handles a key event.
    ///
    /// Ctrl-C always quits. In command mode keys edit the buffer;
    /// otherwise the key is resolved to an action via keybindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.mode == Mode::Command {
            self.handle_command_key(key);
            return;
        }

        // Any keypress in normal mode dismisses a lingering command message
        self.command.clear_message();

        if let Some(action) = self.keybindings.resolve(key, self.panels.view()) {
            self.execute_action(action);
        }
    }

    /// Handles a key event while in command mode.
    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let line = self.command.buffer.clone();
                self.command.clear();
                self.mode = Mode::Normal;

                match execute_command(&line, &mut self.panels) {
                    CommandOutcome::Done => {}
                    CommandOutcome::Quit => self.running = false,
                    CommandOutcome::Error(msg) => self.command.set_message(msg, true),
                }
            }
            KeyCode::Backspace => self.command.backspace(),
            KeyCode::Left => self.command.move_left(),
            KeyCode::Right => self.command.move_right(),
            KeyCode::Char(c) => self.command.insert(c),
            _ => {}
        }
    }

    /// Executes an action.
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Back => self.panels.back(),
            Action::ShowSection(section) => self.panels.show(section),
            Action::Select => {
                if self.panels.menu_visible()
                    && let Some(section) = self.menu_widget.selected_section()
                {
                    self.panels.show(section);
                }
            }
            Action::NavigateUp => {
                if self.panels.menu_visible() {
                    self.menu_widget.select_prev();
                }
            }
            Action::NavigateDown => {
                if self.panels.menu_visible() {
                    self.menu_widget.select_next();
                }
            }
            Action::CommandMode => {
                self.command.clear();
                self.mode = Mode::Command;
            }
        }
    }

    /// Renders the application to the terminal frame.
    ///
    /// Layout: status bar, current panel, command line.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let status = StatusBarWidget::new(self.panels.view()).to_paragraph(&self.theme);
        frame.render_widget(status, chunks[0]);

        self.render_current_view(frame, chunks[1]);
        self.render_command_line(frame, chunks[2]);
    }

    /// Renders whichever panel the switcher says is on screen.
    fn render_current_view(&self, frame: &mut Frame, area: Rect) {
        match self.panels.view() {
            View::Menu => MenuView.render(frame, area, self),
            View::Section(Section::Events) => EventsView.render(frame, area, self),
            View::Section(Section::Interested) => InterestedView.render(frame, area, self),
            View::Section(Section::Criteria) => CriteriaView.render(frame, area, self),
            // Unknown-tag state: menu hidden, nothing active, nothing drawn
            View::Blank => {}
        }
    }

    /// Renders the command line: the input buffer in command mode,
    /// otherwise any lingering result message.
    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let paragraph = if self.mode == Mode::Command {
            Paragraph::new(format!(":{}", self.command.buffer))
                .style(Style::default().fg(self.theme.fg))
        } else if let Some((msg, is_error)) = &self.command.message {
            let color = if *is_error {
                self.theme.error
            } else {
                self.theme.fg
            };
            Paragraph::new(msg.as_str()).style(Style::default().fg(color))
        } else {
            return;
        };

        frame.render_widget(paragraph, area);
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit. Returns an error if terminal setup fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the event loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// The core event loop. Separated from `run` for testability.
    fn event_loop(&mut self, terminal: &mut DeskTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
