//! Keybindings for the eventdesk TUI.
//!
//! Global bindings with an optional view-specific layer; view-specific
//! bindings win when both define the same key.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::panels::{Section, View};

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    Select,
    NavigateUp,
    NavigateDown,
    CommandMode,
    /// Jump straight to a section from anywhere.
    ShowSection(Section),
}

/// Keybindings configuration with global and view-specific layers.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Global keybindings that apply in every view.
    pub global: HashMap<KeyEvent, Action>,
    /// View-specific keybindings that override global bindings.
    pub view_specific: HashMap<View, HashMap<KeyEvent, Action>>,
}

impl KeyBindings {
    /// Resolve a key press using global bindings only.
    pub fn resolve_global(&self, key: KeyEvent) -> Option<Action> {
        self.global.get(&key).copied()
    }

    /// Resolve a key press, view-specific takes precedence over global.
    pub fn resolve(&self, key: KeyEvent, current_view: View) -> Option<Action> {
        if let Some(view_bindings) = self.view_specific.get(&current_view)
            && let Some(action) = view_bindings.get(&key)
        {
            return Some(*action);
        }

        self.global.get(&key).copied()
    }

    /// Add a view-specific keybinding.
    pub fn add_view_binding(&mut self, view: View, key: KeyEvent, action: Action) {
        self.view_specific
            .entry(view)
            .or_default()
            .insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut global = HashMap::new();

        // Navigation - vim style
        global.insert(key('j'), Action::NavigateDown);
        global.insert(key('k'), Action::NavigateUp);

        // Navigation - arrow keys
        global.insert(key_code(KeyCode::Down), Action::NavigateDown);
        global.insert(key_code(KeyCode::Up), Action::NavigateUp);

        // Actions
        global.insert(key_code(KeyCode::Enter), Action::Select);
        global.insert(key_code(KeyCode::Esc), Action::Back);
        global.insert(key('q'), Action::Quit);

        // Modes
        global.insert(key(':'), Action::CommandMode);

        // Section hotkeys by initial and by position
        global.insert(key('e'), Action::ShowSection(Section::Events));
        global.insert(key('i'), Action::ShowSection(Section::Interested));
        global.insert(key('c'), Action::ShowSection(Section::Criteria));
        for (i, section) in Section::ALL.into_iter().enumerate() {
            let digit = char::from_digit(i as u32 + 1, 10).unwrap();
            global.insert(key(digit), Action::ShowSection(section));
        }

        Self {
            global,
            view_specific: HashMap::new(),
        }
    }
}

/// Helper to create a KeyEvent from a character.
fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Helper to create a KeyEvent from a KeyCode.
fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
