//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Portfolio Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Portfolio file not found: {path}")]
    PortfolioNotFound { path: PathBuf },

    #[error("Failed to parse portfolio {path}: {message}")]
    PortfolioParse { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // SSH Server Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Host key {path}: {message}")]
    HostKey { path: PathBuf, message: String },

    #[error("SSH error: {message}")]
    Ssh { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn portfolio_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PortfolioNotFound { path: path.into() }
    }

    pub fn portfolio_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PortfolioParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn host_key(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::HostKey {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn ssh(message: impl Into<String>) -> Self {
        Self::Ssh {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::Terminal { .. } | Error::Ssh { .. }
        )
    }

    /// Check if this error should stop the process before a session starts
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::PortfolioNotFound { .. }
                | Error::PortfolioParse { .. }
                | Error::TerminalInit(_)
                | Error::HostKey { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
