//! # termfolio-core - Core Domain Types
//!
//! Foundation crate for termfolio. Provides the portfolio record, its loader,
//! error handling, logging setup, and ANSI-aware text helpers.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, serde_yaml, thiserror, regex, tracing, unicode-width).
//!
//! ## Public API
//!
//! ### Portfolio (`portfolio`)
//! - [`Portfolio`] - Immutable snapshot of the content shown to every session
//! - [`DocumentFormat`] - TOML or YAML, picked from the file extension
//! - [`Overview`], [`Experience`], [`Project`], [`ProjectLinks`], [`Contact`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Terminal Text (`ansi`)
//! - [`hyperlink()`] - Wrap a label in an OSC 8 hyperlink escape sequence
//! - [`parse_hyperlink()`] - Split an OSC 8 hyperlink back into target and label
//! - [`strip_ansi_codes()`] / [`display_width()`] - Measure text the way a terminal shows it
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use termfolio_core::prelude::*;
//! ```

pub mod ansi;
pub mod error;
pub mod logging;
pub mod portfolio;

/// Prelude for common imports used throughout all termfolio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use ansi::{contains_ansi_codes, display_width, hyperlink, parse_hyperlink, strip_ansi_codes};
pub use error::{Error, Result, ResultExt};
pub use portfolio::{
    Contact, DocumentFormat, Experience, Overview, Portfolio, Project, ProjectLinks,
};
