//! Color palette for the portfolio card.

use ratatui::style::Color;

// --- Intro ---
pub const NAME: Color = Color::Rgb(255, 215, 255);
pub const CURSOR: Color = Color::Rgb(255, 95, 135);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SOFT: Color = Color::Rgb(221, 221, 221);
pub const TEXT_META: Color = Color::Rgb(170, 170, 170);
pub const TEXT_MUTED: Color = Color::Rgb(85, 85, 85);

// --- Tabs ---
pub const TAB_ACTIVE_FG: Color = Color::Black;
pub const TAB_ACTIVE_BG: Color = NAME;
pub const TAB_INACTIVE: Color = Color::Rgb(136, 136, 136);

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const BORDER: Color = Color::Rgb(136, 136, 136);
