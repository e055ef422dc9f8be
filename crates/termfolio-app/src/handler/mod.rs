//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() reducer and message dispatch
//! - `keys`: Key bindings → navigation messages

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Effects the event loop performs after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver exactly one `Message::Tick` after `after` has elapsed
    ScheduleTick { after: Duration },

    /// Set the client's terminal window title
    SetWindowTitle(String),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Number of tick requests carried by this result (always 0 or 1)
    pub fn scheduled_ticks(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, UpdateAction::ScheduleTick { .. }))
            .count()
    }
}
