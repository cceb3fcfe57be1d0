use std::fs;
use std::time::Duration;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SerialParameters {
    pub device_path: String,
    pub baud_rate: u32,
    pub poll_interval_ms: u64,
    pub response_timeout_secs: u64,
}

impl Default for SerialParameters {
    fn default() -> Self {
        Self {
            device_path: "/dev/ttyUSB0".to_string(),
            baud_rate: 9600,
            poll_interval_ms: 100,
            response_timeout_secs: 10,
        }
    }
}

impl SerialParameters {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_secs)
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stderr: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LevelFilter::Warn,
            log_to_stderr: false,
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub serial: SerialParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// Without a file the built-in defaults are used, which talk to /dev/ttyUSB0 at 9600 baud.
///
/// # Arguments
///
/// * 'config_path' - optional path to the configuration file
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    match config_path {
        Some(path) => {
            let toml = fs::read_to_string(path)?;
            parse_config(&toml)
        }
        None => Ok(Config::default()),
    }
}

/// Parses configuration given as a toml document
///
/// # Arguments
///
/// * 'toml' - the toml document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.serial.device_path.is_empty() {
        return Err(ConfigError::from("serial device path must not be empty"));
    }
    if config.serial.baud_rate == 0 {
        return Err(ConfigError::from("baud rate must be greater than zero"));
    }

    Ok(config)
}

/// Picks the configuration file path from the command line arguments
///
/// Only `--config=<path>` is recognized, anything else is returned as unknown so the caller
/// can report it.
///
/// # Arguments
///
/// * 'args' - command line arguments, excluding the program name
pub fn config_path_from_args<I: IntoIterator<Item = String>>(args: I) -> (Option<String>, Vec<String>) {
    let mut config_path: Option<String> = None;
    let mut unknown: Vec<String> = Vec::new();

    for arg in args {
        match arg.strip_prefix("--config=") {
            Some(path) if !path.is_empty() => config_path = Some(path.to_string()),
            _ => unknown.push(arg),
        }
    }

    (config_path, unknown)
}
