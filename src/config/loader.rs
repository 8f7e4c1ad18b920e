//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! calculator settings from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, FormatConfig, TaxConfig};

/// Loads, validates and provides access to the settings file.
///
/// # File Structure
///
/// ```text
/// tax:
///   contribution_rate: 0.095
///   deductions:
///     - name: Income tax
///       rounding: up_to_whole_unit
///       tax_brackets:
///         - { bracket_start: 0, bracket_end: 18200, rate: 0 }
///         - { bracket_start: 18200, bracket_end: 37000, rate: 0.19 }
/// format:
///   displayed_decimal_places: 2
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary.yaml").unwrap();
/// println!("Contribution rate: {}", loader.tax().contribution_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses required fields (`ConfigParseError`)
    /// - A value breaks a structural invariant (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            deductions = loader.tax().deductions.len(),
            "Loaded salary configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("tax:\n  contribution_rate: 0.095\n")?;
    /// assert!(loader.tax().deductions.is_empty());
    /// assert_eq!(loader.format().displayed_decimal_places, 2);
    /// # Ok::<(), salary_calculator::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Wraps an already built configuration, validating it the same way.
    pub fn from_config(config: AppConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn parse(content: &str, source: &str) -> EngineResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Checks the invariants the engine relies on.
    ///
    /// Empty bracket lists are only logged: evaluating such a deduction fails
    /// with a tax configuration error at calculation time.
    fn validate(config: &AppConfig) -> EngineResult<()> {
        let tax = &config.tax;

        if tax.contribution_rate < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                section: "tax.contribution_rate".to_string(),
                message: format!(
                    "contribution rate must not be negative, got {}",
                    tax.contribution_rate
                ),
            });
        }

        for deduction in &tax.deductions {
            if deduction.tax_brackets.is_empty() {
                warn!(deduction = %deduction.name, "Deduction has no tax brackets");
            }

            for bracket in &deduction.tax_brackets {
                if bracket.bracket_end < bracket.bracket_start {
                    return Err(EngineError::InvalidConfig {
                        section: "tax.deductions".to_string(),
                        message: format!(
                            "bracket of '{}' ends at {} before it starts at {}",
                            deduction.name, bracket.bracket_end, bracket.bracket_start
                        ),
                    });
                }
            }

            for (first, second) in deduction.overlapping_brackets() {
                warn!(
                    deduction = %deduction.name,
                    first,
                    second,
                    "Tax brackets overlap, the lowest matching bracket wins"
                );
            }
        }

        Ok(())
    }

    /// Returns the underlying settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the tax section.
    pub fn tax(&self) -> &TaxConfig {
        &self.config.tax
    }

    /// Returns the display section.
    pub fn format(&self) -> &FormatConfig {
        &self.config.format
    }
}
