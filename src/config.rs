use config::{ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

/// Fixed; deliberately not sourced from flags or the environment.
pub const LISTEN_ADDR: &str = "0.0.0.0:5000";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const DEFAULT_GRACEFUL_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
pub struct Config {
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let s = config::Config::builder()
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix("IMAGESWAP"))
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults_log_level_to_info() {
        temp_env::with_var_unset("IMAGESWAP_LOG_LEVEL", || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.log_level, "info");
        });
    }

    #[test]
    #[serial]
    fn test_from_env_reads_log_level_override() {
        temp_env::with_var("IMAGESWAP_LOG_LEVEL", Some("debug"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.log_level, "debug");
        });
    }
}
