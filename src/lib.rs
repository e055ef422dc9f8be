//! termfolio - An interactive portfolio for the terminal
//!
//! Two ways to run: `--serve` starts the built-in SSH server, giving every
//! connection its own session named after the SSH user. Without it, one
//! session runs on the current terminal, which is how the binary works as an
//! sshd `ForceCommand`. This library wires settings, the portfolio document,
//! logging and either mode together; all session logic lives in the
//! workspace crates.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use termfolio_app::config;
use termfolio_core::prelude::*;
use termfolio_core::Portfolio;
use termfolio_ssh::ServeConfig;
use termfolio_tui::{SessionConfig, Theme};

/// Display name used when none is given or found in the environment
pub const GUEST_NAME: &str = "guest";

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Portfolio document (TOML)
    pub portfolio: PathBuf,
    /// Settings file; defaults to `<config_dir>/termfolio/config.toml`
    pub config: Option<PathBuf>,
    /// Display name of the visitor
    pub user: Option<String>,
    pub no_color: bool,
}

/// Options of the SSH server mode
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub listen: IpAddr,
    pub port: u16,
    /// Host key file; generated when missing
    pub host_key: PathBuf,
}

impl ServeOptions {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.listen, self.port)
    }
}

/// Resolve the visitor's display name: explicit value, then `$USER`, then
/// `$LOGNAME`, then [`GUEST_NAME`]. Blank values are skipped.
pub fn display_name(explicit: Option<&str>, env: impl Fn(&str) -> Option<String>) -> String {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(["USER", "LOGNAME"].into_iter().filter_map(&env))
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| GUEST_NAME.to_string())
}

/// Colors are off when asked for on the command line or when `NO_COLOR` is set
/// to a non-empty value.
pub fn use_color(no_color_flag: bool, env: impl Fn(&str) -> Option<String>) -> bool {
    !no_color_flag && env("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Settings, portfolio and theme shared by every session of this process
struct Loaded {
    settings: config::Settings,
    portfolio: Arc<Portfolio>,
    theme: Theme,
}

/// Load settings and the portfolio. Fails only when the portfolio cannot be
/// loaded; settings problems fall back to defaults.
fn load(options: &Options, env: &impl Fn(&str) -> Option<String>) -> Result<Loaded> {
    let settings = match options.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using default settings");
            config::Settings::default()
        }
    };

    let portfolio = Portfolio::load(&options.portfolio)?;
    info!(
        "Loaded portfolio for {:?} from {}",
        portfolio.name,
        options.portfolio.display()
    );

    let theme = if use_color(options.no_color, env) {
        Theme::default()
    } else {
        Theme::plain()
    };

    Ok(Loaded {
        settings,
        portfolio: Arc::new(portfolio),
        theme,
    })
}

/// Build everything a session on the current terminal needs
pub fn session_config(
    options: &Options,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SessionConfig> {
    let loaded = load(options, &env)?;
    Ok(SessionConfig {
        portfolio: loaded.portfolio,
        settings: loaded.settings,
        theme: loaded.theme,
        username: display_name(options.user.as_deref(), &env),
    })
}

/// Build the SSH server configuration. Display names come from each
/// connection's SSH user, so `options.user` is not used.
pub fn serve_config(
    options: &Options,
    serve: &ServeOptions,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ServeConfig> {
    let loaded = load(options, &env)?;
    Ok(ServeConfig {
        listen: serve.address(),
        host_key: serve.host_key.clone(),
        portfolio: loaded.portfolio,
        settings: loaded.settings,
        theme: loaded.theme,
    })
}

/// Write the default settings file, returning where it lives
pub fn init_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory available; pass --config"))?;
    config::init_config_file(&path)?;
    Ok(path)
}

fn init_runtime() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since sessions own the terminal)
    termfolio_core::logging::init()
}

/// Serve the portfolio over SSH until interrupted
pub async fn serve(options: Options, serve: ServeOptions) -> Result<()> {
    init_runtime()?;

    let config = serve_config(&options, &serve, |key| std::env::var(key).ok())?;
    eprintln!("Serving portfolio over SSH on {}", config.listen);

    let result = termfolio_ssh::serve(config).await;
    if let Err(ref e) = result {
        error!("Server error: {:?}", e);
    }

    info!("termfolio server exiting");
    result
}

/// Run one session on the current terminal
pub async fn run(options: Options) -> Result<()> {
    init_runtime()?;

    let config = session_config(&options, |key| std::env::var(key).ok())?;
    info!("Session starting for {:?}", config.username);

    let result = termfolio_tui::run(config).await;

    match &result {
        Err(e) if e.is_recoverable() => warn!("Session ended with error: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("termfolio exiting");
    result
}
