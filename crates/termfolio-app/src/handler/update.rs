//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, trace};

use crate::animation::Phase;
use crate::message::Message;
use crate::state::{SessionState, Viewport};
use crate::tab::Tab;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and return the next state.
///
/// Pure reducer: the only outputs are the returned state and the effects in
/// [`UpdateResult`]. Once the session is quitting every message is ignored.
pub fn update(state: SessionState, message: Message) -> (SessionState, UpdateResult) {
    if state.quitting {
        trace!("Ignoring {:?} after quit", message);
        return (state, UpdateResult::none());
    }

    match message {
        Message::SessionStarting => handle_session_starting(state),

        Message::Key(key) => {
            let result = match handle_key(&state, key) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            };
            (state, result)
        }

        Message::Resize { width, height } => {
            let state = SessionState {
                viewport: Viewport::new(width, height),
                ..state
            };
            (state, UpdateResult::none())
        }

        Message::Tick => handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::NextItem => (page(state, true), UpdateResult::none()),
        Message::PreviousItem => (page(state, false), UpdateResult::none()),

        Message::SelectTab(tab) => (select_tab(state, tab), UpdateResult::none()),
        Message::NextTab => {
            let tab = state.active_tab.next();
            (select_tab(state, tab), UpdateResult::none())
        }
        Message::PreviousTab => {
            let tab = state.active_tab.previous();
            (select_tab(state, tab), UpdateResult::none())
        }

        Message::ToggleHelp => {
            let state = SessionState {
                help_expanded: !state.help_expanded,
                ..state
            };
            (state, UpdateResult::none())
        }

        Message::Quit => {
            info!("Session for {:?} quitting", state.username);
            let state = SessionState {
                quitting: true,
                ..state
            };
            (state, UpdateResult::none())
        }
    }
}

fn handle_session_starting(state: SessionState) -> (SessionState, UpdateResult) {
    let state = state.restart();
    info!(
        "Session starting for {:?} ({} experience, {} projects)",
        state.username,
        state.experience_pager.total(),
        state.project_pager.total()
    );

    let result = UpdateResult::action(UpdateAction::ScheduleTick {
        after: state.animation.timing().tick_interval,
    })
    .with_action(UpdateAction::SetWindowTitle(state.window_title.clone()));

    (state, result)
}

/// Advance the intro by one tick and keep the timer chain alive until done
fn handle_tick(state: SessionState) -> (SessionState, UpdateResult) {
    if state.animation.is_done() {
        return (state, UpdateResult::none());
    }

    let before = state.animation.phase;
    let animation = state.animation.advance();
    if animation.phase != before {
        debug!("Intro phase {:?} -> {:?}", before, animation.phase);
    }

    let result = if animation.phase == Phase::Done {
        UpdateResult::none()
    } else {
        UpdateResult::action(UpdateAction::ScheduleTick {
            after: animation.timing().tick_interval,
        })
    };

    (SessionState { animation, ..state }, result)
}

fn page(state: SessionState, forward: bool) -> SessionState {
    let step = |pager: crate::pager::Pager| {
        if forward {
            pager.next()
        } else {
            pager.previous()
        }
    };

    match state.active_tab {
        Tab::Experience => SessionState {
            experience_pager: step(state.experience_pager),
            ..state
        },
        Tab::Projects => SessionState {
            project_pager: step(state.project_pager),
            ..state
        },
        Tab::Overview | Tab::Contact => state,
    }
}

fn select_tab(state: SessionState, tab: Tab) -> SessionState {
    if tab != state.active_tab {
        debug!("Tab {:?} -> {:?}", state.active_tab, tab);
    }
    SessionState {
        active_tab: tab,
        ..state
    }
}
