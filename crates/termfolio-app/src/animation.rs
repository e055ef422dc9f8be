//! Intro animation: blink → type → hold → done
//!
//! Driven entirely by timer ticks. Each call to [`AnimationState::advance`]
//! consumes one tick and returns the next state; there are no side effects.
//! The event loop keeps ticking until the phase reaches [`Phase::Done`].

use std::time::Duration;

use crate::config::IntroSettings;

/// The cursor toggles on every Nth tick while blinking and typing
pub const CURSOR_TOGGLE_EVERY: u32 = 3;

/// One more character is revealed on every Nth tick while typing
pub const REVEAL_EVERY: u32 = 2;

/// Intro phases in the order they occur. Ordering is meaningful: phases only
/// ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Empty line with a blinking cursor
    Blink,
    /// Intro text is typed out one character at a time
    Typing,
    /// Fully typed text stays on screen for a moment
    Hold,
    /// Intro finished; the main view is shown
    Done,
}

/// Tick interval and phase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub tick_interval: Duration,
    /// Ticks spent in [`Phase::Blink`]
    pub blink_ticks: u32,
    /// Ticks spent in [`Phase::Hold`]
    pub hold_ticks: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(60),
            blink_ticks: 20,
            hold_ticks: 10,
        }
    }
}

impl From<&IntroSettings> for AnimationTiming {
    fn from(settings: &IntroSettings) -> Self {
        Self {
            tick_interval: Duration::from_millis(settings.tick_interval_ms),
            blink_ticks: settings.blink_ticks,
            hold_ticks: settings.hold_ticks,
        }
    }
}

/// Snapshot of the intro animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub phase: Phase,
    /// Ticks since the current phase began
    pub frame: u32,
    /// Number of intro characters currently visible
    pub typed_chars: usize,
    pub cursor_visible: bool,
    intro_len: usize,
    timing: AnimationTiming,
}

impl AnimationState {
    /// Fresh animation for an intro of `intro_len` characters
    pub fn new(intro_len: usize, timing: AnimationTiming) -> Self {
        Self {
            phase: Phase::Blink,
            frame: 0,
            typed_chars: 0,
            cursor_visible: true,
            intro_len,
            timing,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn intro_len(&self) -> usize {
        self.intro_len
    }

    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    /// Consume one timer tick. A finished animation is returned unchanged.
    pub fn advance(self) -> Self {
        if self.is_done() {
            return self;
        }

        let mut next = self;
        next.frame += 1;

        match next.phase {
            Phase::Blink => {
                if next.frame % CURSOR_TOGGLE_EVERY == 0 {
                    next.cursor_visible = !next.cursor_visible;
                }
                if next.frame >= next.timing.blink_ticks {
                    next.phase = Phase::Typing;
                    next.frame = 0;
                }
            }
            Phase::Typing => {
                if next.frame % CURSOR_TOGGLE_EVERY == 0 {
                    next.cursor_visible = !next.cursor_visible;
                }
                if next.frame % REVEAL_EVERY == 0 && next.typed_chars < next.intro_len {
                    next.typed_chars += 1;
                }
                if next.typed_chars >= next.intro_len {
                    next.phase = Phase::Hold;
                    next.frame = 0;
                    next.cursor_visible = true;
                }
            }
            Phase::Hold => {
                if next.frame >= next.timing.hold_ticks {
                    next.phase = Phase::Done;
                    next.cursor_visible = false;
                }
            }
            Phase::Done => {}
        }

        next
    }
}
