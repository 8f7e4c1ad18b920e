//! Error types for the salary calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the configuration loader, the tax engine and
//! the input provider can raise.

use thiserror::Error;

/// The main error type for the salary calculator.
///
/// All fallible operations in the crate return this error type. Configuration
/// problems carry enough context for the caller to point the user at the
/// offending section of the settings file.
///
/// # Example
///
/// ```
/// use salary_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salary.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/salary.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but broke a structural invariant.
    #[error("Invalid configuration in '{section}': {message}")]
    InvalidConfig {
        /// The configuration section holding the bad value.
        section: String,
        /// A description of the broken invariant.
        message: String,
    },

    /// The deduction configuration cannot satisfy a calculation.
    #[error("Tax configuration error in '{section}': {message}")]
    TaxConfiguration {
        /// The configuration section that needs reviewing.
        section: String,
        /// A description of what could not be resolved.
        message: String,
    },

    /// An option value has no handling branch.
    #[error("'{option}' is not a supported option")]
    UnsupportedOption {
        /// The raw option value.
        option: String,
    },

    /// User supplied input failed validation.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// The message to show the user.
        message: String,
    },
}

impl EngineError {
    /// Returns the configuration section to review, for configuration errors.
    ///
    /// Returns `None` when no single section is at fault, including a missing
    /// or unparsable file.
    pub fn config_section(&self) -> Option<&str> {
        match self {
            EngineError::InvalidConfig { section, .. }
            | EngineError::TaxConfiguration { section, .. } => Some(section),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::UnsupportedOption { .. }
            | EngineError::InvalidInput { .. } => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
