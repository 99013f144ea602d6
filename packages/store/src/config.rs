//! # Client configuration (`diary.toml`)
//!
//! The web binary embeds a `diary.toml` next to its manifest and parses it at
//! startup. Every field has a default, so a missing or partial file behaves like
//! the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "/api"          # relative paths resolve against the page origin
//!
//! [timers]
//! countdown_tick_ms = 1000
//! notify_poll_secs = 10
//! notify_lead_secs = 5
//! notify_grace_secs = 60
//!
//! [speech]
//! lang = "th-TH"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `diary.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timers: TimerConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base path or absolute URL of the diary API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Periods of the two UI timers and the unlock notification window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,
    #[serde(default = "default_notify_poll_secs")]
    pub notify_poll_secs: u64,
    /// Notify when an entry unlocks at most this many seconds from now.
    #[serde(default = "default_notify_lead_secs")]
    pub notify_lead_secs: u64,
    /// ... or unlocked at most this many seconds ago.
    #[serde(default = "default_notify_grace_secs")]
    pub notify_grace_secs: u64,
}

fn default_countdown_tick_ms() -> u64 {
    1000
}

fn default_notify_poll_secs() -> u64 {
    10
}

fn default_notify_lead_secs() -> u64 {
    5
}

fn default_notify_grace_secs() -> u64 {
    60
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            countdown_tick_ms: default_countdown_tick_ms(),
            notify_poll_secs: default_notify_poll_secs(),
            notify_lead_secs: default_notify_lead_secs(),
            notify_grace_secs: default_notify_grace_secs(),
        }
    }
}

impl TimerConfig {
    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms.max(1))
    }

    pub fn notify_poll(&self) -> Duration {
        Duration::from_secs(self.notify_poll_secs.max(1))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// BCP 47 language tag handed to the speech recognizer.
    #[serde(default = "default_speech_lang")]
    pub lang: String,
}

fn default_speech_lang() -> String {
    "th-TH".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            lang: default_speech_lang(),
        }
    }
}

impl DiaryConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "diary.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DiaryConfig::from_toml("").unwrap();
        assert_eq!(config, DiaryConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.timers.notify_poll(), Duration::from_secs(10));
        assert_eq!(config.speech.lang, "th-TH");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = DiaryConfig::from_toml(
            r#"
            [timers]
            notify_poll_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.timers.notify_poll_secs, 30);
        assert_eq!(config.timers.countdown_tick_ms, 1000);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_with_builder() {
        let config = DiaryConfig::default().with_base_url("https://diary.example/api");
        let text = config.to_toml().unwrap();
        assert!(text.contains("https://diary.example/api"));
        assert_eq!(DiaryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_zero_periods_are_clamped() {
        let timers = TimerConfig {
            countdown_tick_ms: 0,
            notify_poll_secs: 0,
            ..TimerConfig::default()
        };
        assert_eq!(timers.countdown_tick(), Duration::from_millis(1));
        assert_eq!(timers.notify_poll(), Duration::from_secs(1));
    }
}
