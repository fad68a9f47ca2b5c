//! Terminal UI for the eventdesk events portal.
//!
//! The portal is a main menu plus a fixed set of content sections
//! (events program, interested parties, participation criteria).
//! Navigation is a panel switcher: exactly one section is shown at a
//! time, or the menu when none is.

mod app;
mod command;
mod config;
mod keybindings;
mod panels;
mod terminal;
mod theme;
mod views;
mod widgets;

pub use app::{App, Mode};
pub use command::{CommandInput, CommandOutcome, execute_command};
pub use config::{ConfigError, DeskConfig};
pub use keybindings::{Action, KeyBindings};
pub use panels::{Panel, PanelSet, Section, View};
pub use terminal::{DeskTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, desk_default, high_contrast, theme_by_name};
pub use views::{CriteriaView, EventsView, InterestedView, MenuView, ViewRenderer};
pub use widgets::{MenuListWidget, StatusBarWidget};
