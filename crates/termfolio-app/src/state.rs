//! Session state for one connected client

use termfolio_core::Portfolio;

use crate::animation::{AnimationState, AnimationTiming};
use crate::config::Settings;
use crate::pager::Pager;
use crate::tab::Tab;

/// Used when neither settings nor the portfolio provide intro text
const FALLBACK_INTRO: &str = "termfolio";

/// Last known size of the client terminal.
///
/// Both dimensions are 0 until the first resize event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True once both dimensions are non-zero
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Everything visible to one client.
///
/// Owned exclusively by the session's event loop and replaced wholesale by
/// each call to [`crate::update`]. The portfolio itself is not part of the
/// state; it is shared read-only and handed to the renderer separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Remote user's display name, used verbatim
    pub username: String,

    /// Text typed out by the intro animation
    pub intro_text: String,

    /// Title set on the client's terminal window at session start
    pub window_title: String,

    pub animation: AnimationState,

    pub active_tab: Tab,

    pub experience_pager: Pager,

    pub project_pager: Pager,

    pub viewport: Viewport,

    /// Full key binding listing is shown under the footer
    pub help_expanded: bool,

    /// One-way flag; once set no other field changes
    pub quitting: bool,
}

impl SessionState {
    /// Build the initial state for a client.
    ///
    /// Pagers are sized from the portfolio; a missing portfolio yields empty
    /// pagers.
    pub fn new(
        username: impl Into<String>,
        portfolio: Option<&Portfolio>,
        settings: &Settings,
    ) -> Self {
        let intro_text = settings
            .intro
            .text
            .clone()
            .filter(|text| !text.trim().is_empty())
            .or_else(|| {
                portfolio
                    .map(|p| p.name.trim().to_string())
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_else(|| FALLBACK_INTRO.to_string());

        let timing = AnimationTiming::from(&settings.intro);

        Self {
            username: username.into(),
            animation: AnimationState::new(intro_text.chars().count(), timing),
            intro_text,
            window_title: settings.ui.window_title.clone(),
            active_tab: Tab::default(),
            experience_pager: Pager::new(portfolio.map_or(0, |p| p.experiences.len())),
            project_pager: Pager::new(portfolio.map_or(0, |p| p.projects.len())),
            viewport: Viewport::default(),
            help_expanded: false,
            quitting: false,
        }
    }

    /// Reset everything that a new session starts from, keeping identity,
    /// intro text, pager sizes and any viewport size already reported.
    pub fn restart(self) -> Self {
        let intro_len = self.animation.intro_len();
        let timing = self.animation.timing();
        Self {
            animation: AnimationState::new(intro_len, timing),
            active_tab: Tab::default(),
            experience_pager: Pager::new(self.experience_pager.total()),
            project_pager: Pager::new(self.project_pager.total()),
            help_expanded: false,
            quitting: false,
            ..self
        }
    }

    /// Visible prefix of the intro text
    pub fn typed_intro(&self) -> String {
        self.intro_text
            .chars()
            .take(self.animation.typed_chars)
            .collect()
    }

    /// True once the user asked to leave
    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Pager for the active tab, if it is paginated
    pub fn active_pager(&self) -> Option<&Pager> {
        match self.active_tab {
            Tab::Experience => Some(&self.experience_pager),
            Tab::Projects => Some(&self.project_pager),
            Tab::Overview | Tab::Contact => None,
        }
    }
}
