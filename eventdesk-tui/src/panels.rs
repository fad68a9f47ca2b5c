//! Panel visibility and section switching.
//!
//! The portal shows either the main menu or exactly one content
//! section. `PanelSet` owns every panel and is the only place that
//! mutates visibility, so the invariant "at most one section active,
//! menu and active section mutually exclusive" lives here.

use std::collections::HashMap;
use std::fmt;

/// The named content areas users can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Events,
    Interested,
    Criteria,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 3] = [Section::Events, Section::Interested, Section::Criteria];

    /// Stable string tag used by command input.
    pub fn tag(&self) -> &'static str {
        match self {
            Section::Events => "events",
            Section::Interested => "interested",
            Section::Criteria => "criteria",
        }
    }

    /// Looks up a section by its tag.
    pub fn from_tag(tag: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Human-readable title for display.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Events => "Events program",
            Section::Interested => "Interested parties",
            Section::Criteria => "Participation criteria",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single UI region that can be shown or hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panel {
    visible: bool,
    active: bool,
}

impl Panel {
    fn shown() -> Self {
        Panel {
            visible: true,
            active: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) {
        self.visible = true;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.visible = false;
        self.active = false;
    }
}

/// The top-level view currently on screen.
///
/// `Blank` is the configuration reachable only through an unknown tag
/// in `show_tag`: menu hidden, nothing active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Menu,
    Section(Section),
    Blank,
}

/// Every panel in the portal, constructed once at startup.
///
/// The section-to-panel mapping is data-driven from `Section::ALL`;
/// adding a section means adding an enum variant and a view, not
/// another conditional branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSet {
    menu: Panel,
    sections: HashMap<Section, Panel>,
}

impl PanelSet {
    /// Creates the panel set in its initial state: menu visible,
    /// no section active.
    pub fn new() -> Self {
        Self {
            menu: Panel::shown(),
            sections: Section::ALL
                .into_iter()
                .map(|s| (s, Panel::default()))
                .collect(),
        }
    }

    /// Shows `section` and hides the menu.
    ///
    /// Any previously active section is deactivated first. Idempotent.
    pub fn show(&mut self, section: Section) {
        self.menu.deactivate();
        self.clear_active();
        if let Some(panel) = self.sections.get_mut(&section) {
            panel.activate();
        }
        tracing::debug!(section = %section, "showing section");
    }

    /// Shows the section whose tag is `tag`.
    ///
    /// Unknown tags are a silent no-op by contract: the menu is still
    /// hidden and no section becomes active. Callers inside the crate
    /// use the typed [`show`](Self::show) instead; this entry point
    /// exists for string-tagged input such as the command line.
    pub fn show_tag(&mut self, tag: &str) {
        self.menu.deactivate();
        self.clear_active();
        match Section::from_tag(tag) {
            Some(section) => {
                if let Some(panel) = self.sections.get_mut(&section) {
                    panel.activate();
                }
                tracing::debug!(section = %section, "showing section");
            }
            None => tracing::debug!(tag, "ignoring unknown section tag"),
        }
    }

    /// Returns to the main menu, deactivating every section. Idempotent.
    pub fn back(&mut self) {
        self.menu = Panel::shown();
        self.clear_active();
        tracing::debug!("back to menu");
    }

    fn clear_active(&mut self) {
        for panel in self.sections.values_mut() {
            panel.deactivate();
        }
    }

    /// Whether the main menu panel is visible.
    pub fn menu_visible(&self) -> bool {
        self.menu.is_visible()
    }

    /// Whether the given section's panel carries the active marker.
    pub fn is_active(&self, section: Section) -> bool {
        self.sections.get(&section).is_some_and(Panel::is_active)
    }

    /// The panel for `section`.
    pub fn panel(&self, section: Section) -> Panel {
        self.sections.get(&section).copied().unwrap_or_default()
    }

    /// The currently active section, if any.
    pub fn active_section(&self) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, p)| p.is_active())
            .map(|(&s, _)| s)
    }

    /// Projects the panel flags onto the top-level view.
    pub fn view(&self) -> View {
        match self.active_section() {
            Some(section) => View::Section(section),
            None if self.menu.is_visible() => View::Menu,
            None => View::Blank,
        }
    }
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::new()
    }
}
