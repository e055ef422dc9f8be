//! Message processing through the TEA update loop
//!
//! Runs one external message and all of its follow-up messages through
//! [`update`], collecting the effects for the event loop.

use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::state::SessionState;

/// What the event loop has to do after one external message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Effects to perform, in the order they were produced
    pub actions: Vec<UpdateAction>,
    /// Whether the visible frame may have changed and should be redrawn
    pub redraw: bool,
}

/// Process a message and its follow-ups through the update function
pub fn process_message(state: SessionState, message: Message) -> (SessionState, Outcome) {
    // Late ticks and anything after quitting leave the frame untouched
    let redraw = !state.quitting
        && !(matches!(message, Message::Tick) && state.animation.is_done());

    let mut state = state;
    let mut actions = Vec::new();
    let mut msg = Some(message);

    while let Some(m) = msg {
        let (next, result) = update(state, m);
        state = next;
        actions.extend(result.actions);
        msg = result.message;
    }

    (state, Outcome { actions, redraw })
}
