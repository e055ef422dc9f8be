//! Semantic style builders for the portfolio card.

use ratatui::style::{Modifier, Style};

use super::palette;

// --- Intro ---
pub fn name() -> Style {
    Style::default()
        .fg(palette::NAME)
        .add_modifier(Modifier::BOLD)
}

pub fn cursor() -> Style {
    Style::default()
        .fg(palette::CURSOR)
        .add_modifier(Modifier::BOLD)
}

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_soft() -> Style {
    Style::default().fg(palette::TEXT_SOFT)
}

pub fn text_meta() -> Style {
    Style::default().fg(palette::TEXT_META)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default()
        .fg(palette::TEXT_META)
        .add_modifier(Modifier::DIM)
}

// --- Tabs ---
pub fn tab_active() -> Style {
    Style::default()
        .fg(palette::TAB_ACTIVE_FG)
        .bg(palette::TAB_ACTIVE_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(palette::TAB_INACTIVE)
}

// --- Links and pager ---
pub fn link() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Border ---
pub fn border() -> Style {
    Style::default().fg(palette::BORDER)
}
