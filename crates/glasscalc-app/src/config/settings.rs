//! Settings file loading

use std::path::{Path, PathBuf};

use glasscalc_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "glasscalc";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the settings file: `<config dir>/glasscalc/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
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

/// Write a commented default config file if none exists yet
pub fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .context("Failed to create config directory")?;
    }

    let default_content = r#"# glasscalc configuration

[server]
# Base URL of the evaluation service
url = "http://127.0.0.1:5000"
connect_timeout_ms = 5000

[behavior]
# 1 = Simple, 2 = Advanced, 3 = Scientific
default_mode = 1
# How long errors stay on the display
error_display_ms = 2000
# Probe the service at startup
check_health = true
"#;

    std::fs::write(config_path, default_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}
