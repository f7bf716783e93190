//! Configuration types for glasscalc

use serde::{Deserialize, Serialize};

use glasscalc_core::Mode;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Evaluation service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the evaluation service
    #[serde(default = "default_url")]
    pub url: String,

    /// Connection timeout in milliseconds. Requests themselves are not bounded.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Mode selected at startup (1, 2 or 3)
    #[serde(default)]
    pub default_mode: Mode,

    /// How long an error message stays on the display
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,

    /// Probe `/health` at startup
    #[serde(default = "default_true")]
    pub check_health: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            error_display_ms: default_error_display_ms(),
            check_health: true,
        }
    }
}

fn default_url() -> String {
    glasscalc_remote::DEFAULT_SERVICE_URL.to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

fn default_error_display_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
