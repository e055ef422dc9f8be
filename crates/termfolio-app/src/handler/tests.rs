//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::animation::Phase;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{SessionState, Viewport};
use crate::tab::Tab;
use termfolio_core::{Experience, Portfolio, Project};

/// Portfolio with 3 experience entries and 2 projects
fn test_portfolio() -> Portfolio {
    Portfolio {
        name: "Shubhom Srivastava".into(),
        experiences: vec![Experience::default(); 3],
        projects: vec![Project::default(); 2],
        ..Default::default()
    }
}

fn started() -> SessionState {
    let state = SessionState::new("alice", Some(&test_portfolio()), &Settings::default());
    let (state, _) = update(state, Message::SessionStarting);
    state
}

/// Run a key and its follow-up message the way the event loop does
fn press(state: SessionState, key: InputKey) -> SessionState {
    let (mut state, mut result) = update(state, Message::Key(key));
    while let Some(msg) = result.message.take() {
        let (next, next_result) = update(state, msg);
        state = next;
        result = next_result;
    }
    state
}

fn on_tab(tab: Tab) -> SessionState {
    SessionState {
        active_tab: tab,
        ..started()
    }
}

/// Drive ticks until the timer chain ends, returning the final state and
/// the number of ticks delivered
fn run_tick_chain(state: SessionState) -> (SessionState, usize) {
    let mut state = state;
    let mut delivered = 0;
    loop {
        let (next, result) = update(state, Message::Tick);
        state = next;
        delivered += 1;
        match result.scheduled_ticks() {
            0 => return (state, delivered),
            1 => {}
            n => panic!("tick produced {n} follow-up ticks"),
        }
        assert!(delivered < 10_000, "tick chain never ended");
    }
}

// ─────────────────────────────────────────────────────────
// Session start
// ─────────────────────────────────────────────────────────

#[test]
fn test_session_starting_schedules_first_tick_and_title() {
    let state = SessionState::new("alice", Some(&test_portfolio()), &Settings::default());
    let (state, result) = update(state, Message::SessionStarting);

    assert_eq!(state.animation.phase, Phase::Blink);
    assert_eq!(state.active_tab, Tab::Overview);
    assert!(!state.quitting);
    assert_eq!(result.scheduled_ticks(), 1);
    assert_eq!(
        result.actions,
        vec![
            UpdateAction::ScheduleTick {
                after: Duration::from_millis(60)
            },
            UpdateAction::SetWindowTitle("Portfolio".into()),
        ]
    );
}

#[test]
fn test_session_starting_sizes_pagers() {
    let state = started();
    assert_eq!(state.experience_pager.total(), 3);
    assert_eq!(state.project_pager.total(), 2);
}

#[test]
fn test_session_starting_uses_configured_interval_and_title() {
    let mut settings = Settings::default();
    settings.intro.tick_interval_ms = 25;
    settings.ui.window_title = "Ada's Portfolio".into();

    let state = SessionState::new("alice", Some(&test_portfolio()), &settings);
    let (_, result) = update(state, Message::SessionStarting);

    assert_eq!(
        result.actions,
        vec![
            UpdateAction::ScheduleTick {
                after: Duration::from_millis(25)
            },
            UpdateAction::SetWindowTitle("Ada's Portfolio".into()),
        ]
    );
}

// ─────────────────────────────────────────────────────────
// Timer ticks
// ─────────────────────────────────────────────────────────

#[test]
fn test_each_running_tick_schedules_exactly_one_more() {
    let mut state = started();
    while !state.animation.is_done() {
        let (next, result) = update(state, Message::Tick);
        let expected = usize::from(!next.animation.is_done());
        assert_eq!(result.scheduled_ticks(), expected);
        state = next;
    }
}

#[test]
fn test_tick_chain_ends_at_done() {
    let (state, delivered) = run_tick_chain(started());
    assert!(state.animation.is_done());
    // 20 blink + 36 typing (18 chars) + 10 hold
    assert_eq!(delivered, 20 + 36 + 10);
}

#[test]
fn test_tick_after_done_is_ignored() {
    let (done, _) = run_tick_chain(started());
    let (after, result) = update(done.clone(), Message::Tick);
    assert_eq!(after, done);
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_phases_progress_in_order_over_tick_chain() {
    let mut state = started();
    let mut seen = vec![state.animation.phase];
    while !state.animation.is_done() {
        let (next, _) = update(state, Message::Tick);
        if next.animation.phase != *seen.last().unwrap() {
            seen.push(next.animation.phase);
        }
        state = next;
    }
    assert_eq!(
        seen,
        vec![Phase::Blink, Phase::Typing, Phase::Hold, Phase::Done]
    );
}

#[test]
fn test_ticks_do_not_touch_navigation_state() {
    let state = press(started(), InputKey::Char('2'));
    let state = press(state, InputKey::Char('j'));
    let (state, _) = run_tick_chain(state);
    assert_eq!(state.active_tab, Tab::Experience);
    assert_eq!(state.experience_pager.current_index(), 1);
}

// ─────────────────────────────────────────────────────────
// Resize
// ─────────────────────────────────────────────────────────

#[test]
fn test_resize_stores_viewport_only() {
    let before = started();
    let (after, result) = update(
        before.clone(),
        Message::Resize {
            width: 120,
            height: 40,
        },
    );
    assert_eq!(after.viewport, Viewport::new(120, 40));
    assert_eq!(
        SessionState {
            viewport: Viewport::default(),
            ..after
        },
        before
    );
    assert_eq!(result, UpdateResult::none());
}

#[test]
fn test_resize_mid_animation_keeps_chain_alive() {
    let mut state = started();
    for _ in 0..25 {
        let (next, _) = update(state, Message::Tick);
        state = next;
    }
    let (state, _) = update(
        state,
        Message::Resize {
            width: 80,
            height: 24,
        },
    );
    assert_eq!(state.animation.phase, Phase::Typing);

    let (state, result) = update(state, Message::Tick);
    assert_eq!(result.scheduled_ticks(), 1);
    assert_eq!(state.viewport, Viewport::new(80, 24));
}

// ─────────────────────────────────────────────────────────
// Key bindings
// ─────────────────────────────────────────────────────────

#[test]
fn test_number_keys_select_tabs() {
    for (c, tab) in [
        ('1', Tab::Overview),
        ('2', Tab::Experience),
        ('3', Tab::Projects),
        ('4', Tab::Contact),
    ] {
        let state = press(on_tab(Tab::Contact), InputKey::Char(c));
        assert_eq!(state.active_tab, tab);
    }
}

#[test]
fn test_other_digits_do_nothing() {
    let state = started();
    assert_eq!(handle_key(&state, InputKey::Char('0')), None);
    assert_eq!(handle_key(&state, InputKey::Char('5')), None);
}

#[test]
fn test_horizontal_keys_wrap() {
    assert_eq!(
        press(on_tab(Tab::Overview), InputKey::Left).active_tab,
        Tab::Contact
    );
    assert_eq!(
        press(on_tab(Tab::Overview), InputKey::Char('h')).active_tab,
        Tab::Contact
    );
    assert_eq!(
        press(on_tab(Tab::Contact), InputKey::Right).active_tab,
        Tab::Overview
    );
    assert_eq!(
        press(on_tab(Tab::Contact), InputKey::Char('l')).active_tab,
        Tab::Overview
    );
}

#[test]
fn test_left_then_right_returns_to_same_tab() {
    for tab in Tab::ALL {
        let state = press(press(on_tab(tab), InputKey::Left), InputKey::Right);
        assert_eq!(state.active_tab, tab);
        let state = press(press(on_tab(tab), InputKey::Char('l')), InputKey::Char('h'));
        assert_eq!(state.active_tab, tab);
    }
}

#[test]
fn test_vertical_keys_page_experience() {
    let state = press(on_tab(Tab::Experience), InputKey::Down);
    assert_eq!(state.experience_pager.current_index(), 1);
    let state = press(state, InputKey::Char('j'));
    assert_eq!(state.experience_pager.current_index(), 2);
    let state = press(state, InputKey::Char('j'));
    assert_eq!(state.experience_pager.current_index(), 2);
    let state = press(state, InputKey::Up);
    assert_eq!(state.experience_pager.current_index(), 1);
    let state = press(state, InputKey::Char('k'));
    assert_eq!(state.experience_pager.current_index(), 0);

    assert_eq!(state.active_tab, Tab::Experience);
    assert_eq!(state.project_pager.current_index(), 0);
}

#[test]
fn test_vertical_keys_page_projects() {
    let state = press(on_tab(Tab::Projects), InputKey::Char('j'));
    assert_eq!(state.project_pager.current_index(), 1);
    assert_eq!(state.experience_pager.current_index(), 0);
    assert_eq!(state.active_tab, Tab::Projects);
}

#[test]
fn test_vertical_keys_do_nothing_on_other_tabs() {
    for tab in [Tab::Overview, Tab::Contact] {
        let state = on_tab(tab);
        for key in [
            InputKey::Up,
            InputKey::Down,
            InputKey::Char('j'),
            InputKey::Char('k'),
        ] {
            assert_eq!(handle_key(&state, key), None);
        }
    }
}

#[test]
fn test_pager_positions_survive_tab_switches() {
    let state = press(on_tab(Tab::Experience), InputKey::Char('j'));
    let state = press(state, InputKey::Char('3'));
    let state = press(state, InputKey::Char('j'));
    let state = press(state, InputKey::Char('2'));
    assert_eq!(state.experience_pager.current_index(), 1);
    assert_eq!(state.project_pager.current_index(), 1);
}

#[test]
fn test_paging_empty_sequence_is_a_no_op() {
    let state = SessionState::new("alice", Some(&Portfolio::default()), &Settings::default());
    let (state, _) = update(state, Message::SessionStarting);
    let state = press(state, InputKey::Char('2'));
    let state = press(state, InputKey::Char('j'));
    let state = press(state, InputKey::Char('k'));
    assert_eq!(state.experience_pager.current_index(), 0);
    assert!(state.experience_pager.is_empty());
}

#[test]
fn test_help_key_toggles() {
    let state = press(started(), InputKey::Char('?'));
    assert!(state.help_expanded);
    let state = press(state, InputKey::Char('?'));
    assert!(!state.help_expanded);
}

#[test]
fn test_quit_keys() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(&started(), key), Some(Message::Quit));
        assert!(press(started(), key).should_quit());
    }
}

#[test]
fn test_quit_keys_work_on_paginated_tabs() {
    assert!(press(on_tab(Tab::Projects), InputKey::Char('q')).should_quit());
}

#[test]
fn test_unbound_keys_change_nothing() {
    let before = started();
    let after = press(before.clone(), InputKey::Char('x'));
    assert_eq!(after, before);
}

// ─────────────────────────────────────────────────────────
// Intro is not modal
// ─────────────────────────────────────────────────────────

#[test]
fn test_keys_are_honoured_during_intro() {
    let state = started();
    assert_eq!(state.animation.phase, Phase::Blink);

    let state = press(state, InputKey::Char('3'));
    let state = press(state, InputKey::Char('?'));
    assert_eq!(state.active_tab, Tab::Projects);
    assert!(state.help_expanded);
    assert_eq!(state.animation.phase, Phase::Blink);
}

#[test]
fn test_key_during_typing_does_not_disturb_animation() {
    let mut state = started();
    for _ in 0..30 {
        let (next, _) = update(state, Message::Tick);
        state = next;
    }
    let animation = state.animation;

    let state = press(state, InputKey::Right);
    assert_eq!(state.animation, animation);
    assert_eq!(state.active_tab, Tab::Experience);
}

// ─────────────────────────────────────────────────────────
// Quitting
// ─────────────────────────────────────────────────────────

#[test]
fn test_nothing_mutates_after_quit() {
    let quitting = press(on_tab(Tab::Experience), InputKey::Char('q'));
    assert!(quitting.should_quit());

    for msg in [
        Message::Tick,
        Message::Key(InputKey::Char('1')),
        Message::Key(InputKey::Char('j')),
        Message::Resize {
            width: 10,
            height: 10,
        },
        Message::SessionStarting,
        Message::ToggleHelp,
        Message::NextTab,
    ] {
        let (after, result) = update(quitting.clone(), msg);
        assert_eq!(after, quitting);
        assert_eq!(result, UpdateResult::none());
    }
}

#[test]
fn test_quit_mid_animation_ends_tick_chain() {
    let mut state = started();
    for _ in 0..5 {
        let (next, _) = update(state, Message::Tick);
        state = next;
    }
    let state = press(state, InputKey::Esc);
    let (_, result) = update(state, Message::Tick);
    assert_eq!(result.scheduled_ticks(), 0);
}
