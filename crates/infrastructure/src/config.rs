use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Name of the settings document inside the user's documents folder
pub const SETTINGS_FILE_NAME: &str = "app_settings.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NetworkConfig {
    /// TCP connect timeout; the OS default applies when unset
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

impl NetworkConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpoolerConfig {
    #[serde(default = "default_job_name")]
    pub job_name: String,
}

impl Default for SpoolerConfig {
    fn default() -> Self {
        Self {
            job_name: default_job_name(),
        }
    }
}

fn default_job_name() -> String {
    "Zebra Print Job".to_string()
}

/// Station process configuration (read-only, separate from the operator settings document)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Overrides the default settings document location
    #[serde(default)]
    pub settings_path: Option<PathBuf>,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub spooler: SpoolerConfig,
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "production".into());

        let s = Config::builder()
            .set_default("spooler.job_name", default_job_name())?
            // Local config file, optional: the station runs fine on defaults
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. LABEL_STATION__NETWORK__CONNECT_TIMEOUT_MS=3000)
            .add_source(Environment::with_prefix("LABEL_STATION").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Settings document path: explicit override, else `<home>/Documents/app_settings.json`
    pub fn settings_path(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(default_settings_path)
    }
}

/// `<home>/Documents/app_settings.json`, home taken from `USERPROFILE` then `HOME`
pub fn default_settings_path() -> PathBuf {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    home.join("Documents").join(SETTINGS_FILE_NAME)
}
