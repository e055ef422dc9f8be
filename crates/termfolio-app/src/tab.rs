//! Top-level content tabs

/// The four content sections, in tab strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Experience,
    Projects,
    Contact,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Experience, Tab::Projects, Tab::Contact];

    /// Position in the tab strip (0..=3)
    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Experience => 1,
            Tab::Projects => 2,
            Tab::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Tab to the right, wrapping from Contact back to Overview
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping from Overview to Contact
    pub fn previous(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Experience => "Experience",
            Tab::Projects => "Projects",
            Tab::Contact => "Contact",
        }
    }

    /// Whether up/down keys page through items on this tab
    pub fn is_paginated(self) -> bool {
        matches!(self, Tab::Experience | Tab::Projects)
    }
}
