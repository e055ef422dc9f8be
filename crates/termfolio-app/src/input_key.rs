//! Abstract input key event, independent of terminal library.
//!
//! The session state machine never sees crossterm types. Whatever carries the
//! client's keystrokes converts them into `InputKey` at the boundary, so the
//! reducer can be driven from tests or a different transport unchanged.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c is the interrupt binding)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,

    // Action keys
    /// Escape key
    Esc,
}
