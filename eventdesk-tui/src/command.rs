//! Command-mode input and dispatch.
//!
//! A minimal `:`-prefixed command line: `goto <section>`, `back`,
//! `quit`. Section tags outside the known set are ignored by the
//! panel contract; only unknown *commands* report an error.

use crate::panels::PanelSet;

/// Manages command-mode input state.
#[derive(Debug, Default, Clone)]
pub struct CommandInput {
    /// Current input buffer (without the leading ':').
    pub buffer: String,
    /// Cursor position as a byte offset into the buffer, always on a
    /// char boundary.
    pub cursor: usize,
    /// Result message to display after a command executes.
    /// Tuple of (message, is_error).
    pub message: Option<(String, bool)>,
}

impl CommandInput {
    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.remove(idx);
            self.cursor = idx;
        }
    }

    /// Move cursor left one character.
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move cursor right one character.
    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Clear all input state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.message = None;
    }

    /// Set a message to display.
    pub fn set_message(&mut self, msg: impl Into<String>, is_error: bool) {
        self.message = Some((msg.into(), is_error));
    }

    /// Clear the message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Outcome of executing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Command ran; nothing further to do.
    Done,
    /// The app should exit.
    Quit,
    /// The command could not be understood.
    Error(String),
}

/// Parse and execute a command string like "goto events".
pub fn execute_command(input: &str, panels: &mut PanelSet) -> CommandOutcome {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let (name, args) = match parts.split_first() {
        Some((n, a)) => (*n, a),
        None => return CommandOutcome::Error("Empty command".into()),
    };

    match (name, args) {
        ("goto", [tag]) => {
            // Unknown tags fall through silently; see PanelSet::show_tag.
            panels.show_tag(tag);
            CommandOutcome::Done
        }
        ("goto", _) => CommandOutcome::Error("Usage: goto <section>".into()),
        ("back", []) => {
            panels.back();
            CommandOutcome::Done
        }
        ("quit", []) | ("q", []) => CommandOutcome::Quit,
        _ => CommandOutcome::Error(format!("Unknown command: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::{Section, View};

    // CommandInput tests

    #[test]
    fn insert_appends_at_cursor() {
        let mut input = CommandInput::default();
        input.insert('g');
        input.insert('o');

        assert_eq!(input.buffer, "go");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn insert_mid_buffer_respects_cursor() {
        let mut input = CommandInput::default();
        input.insert('g');
        input.insert('o');
        input.move_left();
        input.insert('t');

        assert_eq!(input.buffer, "gto");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = CommandInput::default();
        input.insert('g');
        input.insert('o');
        input.backspace();

        assert_eq!(input.buffer, "g");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = CommandInput::default();
        input.backspace();

        assert_eq!(input.buffer, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn insert_after_multibyte_char_keeps_boundaries() {
        let mut input = CommandInput::default();
        input.insert('é');
        input.insert('x');

        assert_eq!(input.buffer, "éx");
        assert_eq!(input.cursor, "éx".len());
    }

    #[test]
    fn backspace_removes_whole_multibyte_char() {
        let mut input = CommandInput::default();
        input.insert('ç');
        input.insert('a');
        input.backspace();
        input.backspace();

        assert_eq!(input.buffer, "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn cursor_steps_over_multibyte_chars() {
        let mut input = CommandInput::default();
        input.insert('é');
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());

        input.move_left();
        input.insert('x');
        assert_eq!(input.buffer, "xé");
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut input = CommandInput::default();
        input.insert('x');
        input.move_right();
        assert_eq!(input.cursor, 1);

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut input = CommandInput::default();
        input.insert('q');
        input.set_message("oops", true);
        input.clear();

        assert_eq!(input.buffer, "");
        assert_eq!(input.cursor, 0);
        assert!(input.message.is_none());
    }

    // execute_command tests

    #[test]
    fn goto_shows_section() {
        let mut panels = PanelSet::new();
        let outcome = execute_command("goto interested", &mut panels);

        assert_eq!(outcome, CommandOutcome::Done);
        assert_eq!(panels.active_section(), Some(Section::Interested));
        assert!(!panels.menu_visible());
    }

    #[test]
    fn goto_unknown_tag_is_silent_and_blanks_view() {
        let mut panels = PanelSet::new();
        let outcome = execute_command("goto archive", &mut panels);

        // No error by contract, but menu stays hidden and nothing is active.
        assert_eq!(outcome, CommandOutcome::Done);
        assert!(!panels.menu_visible());
        assert_eq!(panels.active_section(), None);
        assert_eq!(panels.view(), View::Blank);
    }

    #[test]
    fn goto_without_argument_is_an_error() {
        let mut panels = PanelSet::new();
        let outcome = execute_command("goto", &mut panels);

        assert_eq!(outcome, CommandOutcome::Error("Usage: goto <section>".into()));
        assert_eq!(panels, PanelSet::new());
    }

    #[test]
    fn back_returns_to_menu() {
        let mut panels = PanelSet::new();
        panels.show(Section::Events);

        let outcome = execute_command("back", &mut panels);

        assert_eq!(outcome, CommandOutcome::Done);
        assert!(panels.menu_visible());
    }

    #[test]
    fn quit_and_alias_request_exit() {
        let mut panels = PanelSet::new();
        assert_eq!(execute_command("quit", &mut panels), CommandOutcome::Quit);
        assert_eq!(execute_command("q", &mut panels), CommandOutcome::Quit);
    }

    #[test]
    fn unknown_command_reports_error() {
        let mut panels = PanelSet::new();
        let outcome = execute_command("reload", &mut panels);

        assert_eq!(
            outcome,
            CommandOutcome::Error("Unknown command: reload".into())
        );
    }

    #[test]
    fn empty_input_reports_error() {
        let mut panels = PanelSet::new();
        assert_eq!(
            execute_command("   ", &mut panels),
            CommandOutcome::Error("Empty command".into())
        );
    }
}
