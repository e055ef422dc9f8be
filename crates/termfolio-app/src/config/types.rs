//! Configuration types for termfolio
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `IntroSettings` - Intro animation text and timing
//! - `UiSettings` - Window title, card geometry and farewell text

use serde::{Deserialize, Serialize};

/// Shortest tick interval accepted from configuration
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Narrowest card accepted from configuration
pub const MIN_CARD_WIDTH: u16 = 40;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub intro: IntroSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Clamp values that would make the session unusable
    pub fn validated(mut self) -> Self {
        if self.intro.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            tracing::warn!(
                "intro.tick_interval_ms={} is too small, using {}",
                self.intro.tick_interval_ms,
                MIN_TICK_INTERVAL_MS
            );
            self.intro.tick_interval_ms = MIN_TICK_INTERVAL_MS;
        }
        if self.ui.card_width < MIN_CARD_WIDTH {
            tracing::warn!(
                "ui.card_width={} is too small, using {}",
                self.ui.card_width,
                MIN_CARD_WIDTH
            );
            self.ui.card_width = MIN_CARD_WIDTH;
        }
        self
    }
}

/// Intro animation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntroSettings {
    /// Text typed out by the intro. Defaults to the portfolio owner's name.
    #[serde(default)]
    pub text: Option<String>,

    /// Milliseconds between animation ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Ticks of cursor-only blinking before typing starts
    #[serde(default = "default_blink_ticks")]
    pub blink_ticks: u32,

    /// Ticks the fully typed text stays up before the main view
    #[serde(default = "default_hold_ticks")]
    pub hold_ticks: u32,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            text: None,
            tick_interval_ms: default_tick_interval_ms(),
            blink_ticks: default_blink_ticks(),
            hold_ticks: default_hold_ticks(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    60
}

fn default_blink_ticks() -> u32 {
    20
}

fn default_hold_ticks() -> u32 {
    10
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal window title set when the session starts
    #[serde(default = "default_window_title")]
    pub window_title: String,

    /// Outer width of the portfolio card, in columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,

    /// Rows reserved for tab content so the tab strip stays put
    #[serde(default = "default_content_height")]
    pub content_height: u16,

    /// Line shown once the user quits
    #[serde(default = "default_farewell")]
    pub farewell: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            card_width: default_card_width(),
            content_height: default_content_height(),
            farewell: default_farewell(),
        }
    }
}

fn default_window_title() -> String {
    "Portfolio".to_string()
}

fn default_card_width() -> u16 {
    100
}

fn default_content_height() -> u16 {
    15
}

fn default_farewell() -> String {
    "Bye!".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.intro.tick_interval_ms, 60);
        assert_eq!(settings.intro.blink_ticks, 20);
        assert_eq!(settings.intro.hold_ticks, 10);
        assert_eq!(settings.intro.text, None);
        assert_eq!(settings.ui.card_width, 100);
        assert_eq!(settings.ui.farewell, "Bye!");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[intro]
text = "Hello"

[ui]
window_title = "My Portfolio"
"#,
        )
        .unwrap();

        assert_eq!(settings.intro.text.as_deref(), Some("Hello"));
        assert_eq!(settings.intro.tick_interval_ms, 60);
        assert_eq!(settings.ui.window_title, "My Portfolio");
        assert_eq!(settings.ui.content_height, 15);
    }

    #[test]
    fn test_validated_clamps_tick_interval_and_width() {
        let mut settings = Settings::default();
        settings.intro.tick_interval_ms = 0;
        settings.ui.card_width = 10;

        let settings = settings.validated();
        assert_eq!(settings.intro.tick_interval_ms, MIN_TICK_INTERVAL_MS);
        assert_eq!(settings.ui.card_width, MIN_CARD_WIDTH);
    }

    #[test]
    fn test_validated_keeps_sane_values() {
        let settings = Settings::default();
        assert_eq!(settings.clone().validated(), settings);
    }
}
