//! Configuration file parsing for termfolio
//!
//! Supports `<config_dir>/termfolio/config.toml` (or an explicit path) with
//! `[intro]` and `[ui]` sections.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
