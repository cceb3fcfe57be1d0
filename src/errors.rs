use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_lamp::errors::LampError;

/// Stages of a configuration run, used to tell the operator where things went wrong
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Bootstrap,
    Collect,
    Transmit,
    Receive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Stage::Bootstrap => write!(f, "bootstrap"),
            Stage::Collect   => write!(f, "input collection"),
            Stage::Transmit  => write!(f, "transmission"),
            Stage::Receive   => write!(f, "reception"),
        }
    }
}

#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum TriLightError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Console: {0}")]
    Console(String),
    #[error("DeviceUnavailable: {0}")]
    DeviceUnavailable(String),
    #[error("IncompleteInput: input ended before the {0} was given, nothing was sent")]
    IncompleteInput(String),
    #[error("Terminal: {0}")]
    Terminal(String),
    #[error("TransmissionFailure: {0}")]
    TransmissionFailure(String),
    #[error("ReceptionFailure: {0}")]
    ReceptionFailure(String),
}

impl TriLightError {
    /// Returns the stage the error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            TriLightError::Config(_) | TriLightError::Console(_) | TriLightError::DeviceUnavailable(_) => Stage::Bootstrap,
            TriLightError::IncompleteInput(_) | TriLightError::Terminal(_) => Stage::Collect,
            TriLightError::TransmissionFailure(_) => Stage::Transmit,
            TriLightError::ReceptionFailure(_) => Stage::Receive,
        }
    }
}

impl From<LampError> for TriLightError {
    fn from(e: LampError) -> Self {
        match e {
            LampError::Unavailable { .. } => TriLightError::DeviceUnavailable(e.to_string()),
            LampError::Write(_) => TriLightError::TransmissionFailure(e.to_string()),
            LampError::Read(_) => TriLightError::ReceptionFailure(e.to_string()),
        }
    }
}

impl From<std::io::Error> for TriLightError {
    fn from(e: std::io::Error) -> Self { TriLightError::Terminal(e.to_string()) }
}
