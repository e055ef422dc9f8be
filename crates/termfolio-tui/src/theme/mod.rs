//! Theme for the portfolio card.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - [`Theme`] - The immutable set of styles handed to the renderer

pub mod palette;
pub mod styles;

use ratatui::style::Style;

/// Styles used by the renderer, built once and injected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Intro text and the portfolio owner's name
    pub name: Style,
    /// Intro cursor block
    pub cursor: Style,
    pub tagline: Style,
    /// Entry headers ("Company — Role", project name)
    pub heading: Style,
    pub body: Style,
    /// Period / location line and the stack line
    pub meta: Style,
    /// Welcome line
    pub dim: Style,
    pub link: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub footer: Style,
    pub dot_active: Style,
    pub dot_inactive: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: styles::name(),
            cursor: styles::cursor(),
            tagline: styles::text_soft(),
            heading: styles::heading(),
            body: styles::text_primary(),
            meta: styles::text_meta(),
            dim: styles::dim(),
            link: styles::link(),
            tab_active: styles::tab_active(),
            tab_inactive: styles::tab_inactive(),
            footer: styles::text_muted(),
            dot_active: styles::accent(),
            dot_inactive: styles::text_muted(),
            border: styles::border(),
        }
    }
}

impl Theme {
    /// Theme without colors or modifiers, for terminals that cannot show them
    pub fn plain() -> Self {
        let none = Style::default();
        Self {
            name: none,
            cursor: none,
            tagline: none,
            heading: none,
            body: none,
            meta: none,
            dim: none,
            link: none,
            tab_active: none.add_modifier(ratatui::style::Modifier::REVERSED),
            tab_inactive: none,
            footer: none,
            dot_active: none,
            dot_inactive: none,
            border: none,
        }
    }
}
