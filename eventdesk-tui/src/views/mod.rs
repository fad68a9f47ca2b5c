//! View system for the eventdesk TUI.
//!
//! One renderer per panel: the main menu plus each content section.
//! Which view is on screen is decided by `PanelSet::view()`.

mod criteria;
mod events;
mod interested;
mod menu;
mod traits;

pub use criteria::CriteriaView;
pub use events::EventsView;
pub use interested::InterestedView;
pub use menu::MenuView;
pub use traits::ViewRenderer;
