//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use termfolio_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "termfolio";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# termfolio configuration

[intro]
# text = "Your Name"    # Defaults to the portfolio's name
tick_interval_ms = 60
blink_ticks = 20
hold_ticks = 10

[ui]
window_title = "Portfolio"
card_width = 100
content_height = 15
farewell = "Bye!"
"#;

/// Default location of the settings file (`<config_dir>/termfolio/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// Never fails: a missing file, an unreadable file and invalid TOML all fall
/// back to defaults so a bad config cannot keep visitors out.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings.validated()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::config(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(())
}
