//! Widgets for the eventdesk TUI.
//!
//! Reusable components for rendering UI elements in the terminal.

mod menu_list;
mod status_bar;

pub use menu_list::MenuListWidget;
pub use status_bar::StatusBarWidget;
