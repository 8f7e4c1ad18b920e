//! Configuration loading and management for the salary calculator.
//!
//! This module provides functionality to load the settings file, which holds
//! the contribution rate, the deduction brackets and the display format.
//!
//! # Example
//!
//! ```no_run
//! use salary_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary.yaml").unwrap();
//! for deduction in &config.tax().deductions {
//!     println!("{}: {} brackets", deduction.name, deduction.tax_brackets.len());
//! }
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, ApplicableTo, DeductionConfig, FormatConfig, RoundingStrategy, TaxBracketConfig,
    TaxConfig, UNBOUNDED_BRACKET_END,
};
