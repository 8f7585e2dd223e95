use crate::model::draw::CANDIDATE_COUNT;
use dotenv::dotenv;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse {name} from {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub random_source_url: String,
    pub random_source_timeout: Option<Duration>,
    pub server_host: String,
    pub server_port: u16,
    pub log_config_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            random_source_url: format!(
                "https://qrng.anu.edu.au/API/jsonI.php?length={}&type=uint8",
                CANDIDATE_COUNT
            ),
            // Transport default when unset.
            random_source_timeout: None,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            log_config_path: "./log-config.yml".to_string(),
        }
    }
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let random_source_timeout = match var("RANDOM_SOURCE_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(parse("RANDOM_SOURCE_TIMEOUT_SECS", value)?)),
            None => defaults.random_source_timeout,
        };
        let server_port = match var("SERVER_PORT") {
            Some(value) => parse("SERVER_PORT", value)?,
            None => defaults.server_port,
        };

        Ok(Config {
            random_source_url: var("RANDOM_SOURCE_URL").unwrap_or(defaults.random_source_url),
            random_source_timeout,
            server_host: var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            log_config_path: var("LOG_CONFIG_PATH").unwrap_or(defaults.log_config_path),
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.random_source_url,
            "https://qrng.anu.edu.au/API/jsonI.php?length=49&type=uint8"
        );
        assert_eq!(config.random_source_timeout, None);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.log_config_path, "./log-config.yml");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("RANDOM_SOURCE_URL", "http://localhost:9000/random"),
            ("RANDOM_SOURCE_TIMEOUT_SECS", "15"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9090"),
        ])
        .unwrap();
        assert_eq!(config.random_source_url, "http://localhost:9000/random");
        assert_eq!(config.random_source_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 9090);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config_from(&[("SERVER_PORT", ""), ("RANDOM_SOURCE_TIMEOUT_SECS", "")]).unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.random_source_timeout, None);
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse SERVER_PORT from \"eighty\"");
    }
}
