use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::domain::template::Template;
use crate::error::{Result, VersionPickError};

/// Represents the complete configuration for version-pick.
///
/// Contains the time zone for template resolution, the template list offered
/// on the custom tab, and behavior options. Read-only for the duration of an
/// editing session.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_templates")]
    pub templates: Vec<Template>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default time zone identifier.
fn default_timezone() -> String {
    "UTC".to_string()
}

/// Returns the system-default date-based templates.
fn default_templates() -> Vec<Template> {
    vec![
        Template::new("v{YYYY}.{MM}.{DD}", "Date"),
        Template::new("{YYYY}.{MM}.{DD}-{hh}{mm}", "Date and time"),
    ]
}

fn default_settle_delay_ms() -> u64 {
    300
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of the picker without affecting candidate
/// computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default)]
    pub skip_confirmation: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            settle_delay_ms: default_settle_delay_ms(),
            skip_confirmation: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timezone: default_timezone(),
            templates: default_templates(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Settle delay before a changed input is conflict-checked.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.behavior.settle_delay_ms)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionpick.toml` in current directory
/// 3. `~/.config/.versionpick.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versionpick.toml").exists() {
        fs::read_to_string("./versionpick.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versionpick.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| VersionPickError::config(e.to_string()))
}
