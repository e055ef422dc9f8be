//! Key bindings for the session
//!
//! On the Experience and Projects tabs the vertical keys page through items.
//! They take priority over every other binding there and do nothing on the
//! other tabs.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::SessionState;
use crate::tab::Tab;

/// Convert a key event into a message for the active tab
pub fn handle_key(state: &SessionState, key: InputKey) -> Option<Message> {
    if state.active_tab.is_paginated() {
        if let Some(msg) = handle_key_pagination(key) {
            return Some(msg);
        }
    }
    handle_key_global(key)
}

/// Item paging on Experience/Projects
fn handle_key_pagination(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') => Some(Message::NextItem),
        InputKey::Up | InputKey::Char('k') => Some(Message::PreviousItem),
        _ => None,
    }
}

/// Bindings available on every tab, also during the intro
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        // Jump to tab
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Tab::from_index(index).map(Message::SelectTab)
        }

        // Switch tabs (wraps)
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),

        InputKey::Char('?') => Some(Message::ToggleHelp),

        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}
