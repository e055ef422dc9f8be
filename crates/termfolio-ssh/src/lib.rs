//! termfolio-ssh - Serve the portfolio over SSH
//!
//! A standalone SSH server: visitors connect with any user name and get a
//! full-screen portfolio session of their own. Authentication accepts
//! everyone; the host key is generated on first start and reused afterwards.

pub mod host_key;
pub mod input;
pub mod server;
pub mod session;
pub mod writer;

pub use host_key::DEFAULT_HOST_KEY;
pub use server::{serve, ServeConfig, DEFAULT_PORT};
