//! Message types for the session (TEA pattern)

use crate::input_key::InputKey;
use crate::tab::Tab;

/// All possible messages/actions in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // External Events
    // ─────────────────────────────────────────────────────────
    /// The client connected; initialise everything and start the intro
    SessionStarting,

    /// Keyboard event from the client
    Key(InputKey),

    /// Client viewport changed size (character cells)
    Resize { width: u16, height: u16 },

    /// Intro animation timer fired
    Tick,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages (produced from keys)
    // ─────────────────────────────────────────────────────────
    /// Show the next item on the active paginated tab
    NextItem,
    /// Show the previous item on the active paginated tab
    PreviousItem,
    /// Jump directly to a tab
    SelectTab(Tab),
    /// Move one tab to the right (wraps)
    NextTab,
    /// Move one tab to the left (wraps)
    PreviousTab,
    /// Expand or collapse the key binding help
    ToggleHelp,

    /// End the session
    Quit,
}
