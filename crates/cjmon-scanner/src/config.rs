use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Company identifier the CJ Monitor payload is filed under
    #[serde(default = "default_manufacturer_id")]
    pub manufacturer_id: u16,

    /// File of captured advertisements (JSON lines); stdin when unset
    #[serde(default)]
    pub input_path: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_service_name() -> String {
    "cjmon-scanner".to_string()
}

fn default_manufacturer_id() -> u16 {
    0xFFFF
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("CJMON"))
            .build()?
            .try_deserialize()
    }
}
