use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

pub const DEFAULT_BACKEND_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the fitness center backend API.
    pub backend_api_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn backend_api_url(&self) -> &str {
        self.backend_api_url
            .as_deref()
            .unwrap_or(DEFAULT_BACKEND_API_URL)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Get the absolute path to the configuration file.
///
/// This is a "fitcenter" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.fitcenter`.
pub fn default_config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".fitcenter");

        #[cfg(not(target_os = "linux"))]
        path.push("FitCenter");

        path.push(DEFAULT_FILE_NAME);
        return Ok(path);
    }

    Err("Failed to get default configuration directory".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_log_level() {
        let config =
            toml::from_slice::<Config>(b"log_level = \"debug\"").expect("must parse config");
        assert_eq!(Ok(filter::LevelFilter::DEBUG), config.log_level());

        let config = toml::from_slice::<Config>(b"").expect("must parse config");
        assert_eq!(Ok(filter::LevelFilter::INFO), config.log_level());
        assert_eq!(DEFAULT_BACKEND_API_URL, config.backend_api_url());

        let config = toml::from_slice::<Config>(b"log_level = \"warning\"")
            .expect("must parse config");
        assert!(config.log_level().is_err());
    }

    #[test]
    fn config_backend_api_url() {
        let config =
            toml::from_slice::<Config>(b"backend_api_url = \"http://localhost:9000/\"")
                .expect("must parse config");
        assert_eq!("http://localhost:9000/", config.backend_api_url());
    }
}
