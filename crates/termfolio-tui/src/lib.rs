//! termfolio-tui - Terminal UI for termfolio
//!
//! This crate provides the ratatui-based terminal interface: the pure render
//! pipeline that turns session state into a frame, the widget that draws that
//! frame (hyperlinks included), crossterm event conversion, and the async
//! runner that owns one session's terminal.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::{frame_to_string, Renderer};
pub use runner::{run, run_session, SessionConfig, MESSAGE_BUFFER};
pub use theme::Theme;
