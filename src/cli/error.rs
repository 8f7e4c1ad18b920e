//! Error types for the command line front end.

use thiserror::Error;

use crate::error::EngineError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, calculation or input error from the engine
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the message shown to the user, if this error is user facing.
    ///
    /// Configuration and input problems are reported and the program ends
    /// normally. Other errors are unexpected and have no user message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            CliError::Engine(EngineError::InvalidInput { message, .. }) => Some(message.clone()),
            CliError::Engine(EngineError::ConfigNotFound { path }) => Some(format!(
                "Tax configuration file {} was not found. Please check the --config path",
                path
            )),
            CliError::Engine(EngineError::ConfigParseError { path, message }) => Some(format!(
                "Tax configuration file {} could not be read: {}",
                path, message
            )),
            CliError::Engine(EngineError::UnsupportedOption { option }) => {
                Some(format!("Pay frequency {} is not a supported option", option))
            }
            CliError::Engine(error) => error.config_section().map(|section| {
                format!(
                    "Tax configuration is invalid. Please review the {} section of the configuration file",
                    section
                )
            }),
            CliError::Io(_) | CliError::Serialization(_) => None,
        }
    }
}
