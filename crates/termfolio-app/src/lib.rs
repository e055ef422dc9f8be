//! termfolio-app - Session state machine for termfolio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for one
//! connected client: a `Message` stream goes through a pure `update()` reducer
//! that returns the next `SessionState` plus the effects (`UpdateAction`) the
//! event loop must perform, such as scheduling the next animation tick.
//! It also owns settings loading and OS signal handling.

pub mod animation;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pager;
pub mod process;
pub mod signals;
pub mod state;
pub mod tab;

// Re-export primary types
pub use animation::{AnimationState, AnimationTiming, Phase};
pub use config::{IntroSettings, Settings, UiSettings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use pager::Pager;
pub use process::{process_message, Outcome};
pub use state::{SessionState, Viewport};
pub use tab::Tab;
