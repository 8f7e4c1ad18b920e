//! Reading and validating user input.
//!
//! Input is validated once; there is no retry. A rejected value ends the
//! run with a message for the user.

use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineError;
use crate::models::PayFrequency;

use super::error::Result;

const SALARY_MESSAGE: &str = "Please enter a positive number for salary package.";
const FREQUENCY_MESSAGE: &str = "Please enter a valid pay frequency";

/// Parses a yearly salary package.
///
/// Accepts a plain decimal number, optionally with `,` thousands separators
/// and a leading `$`. The value must be greater than zero.
///
/// # Example
///
/// ```
/// use salary_calculator::cli::parse_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_salary(" $65,000 ").unwrap(), Decimal::from(65_000));
/// assert!(parse_salary("-5").is_err());
/// ```
pub fn parse_salary(input: &str) -> std::result::Result<Decimal, EngineError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match Decimal::from_str(&cleaned) {
        Ok(salary) if salary > Decimal::ZERO => Ok(salary),
        _ => {
            debug!(input = %input.trim(), "Rejected salary input");
            Err(EngineError::InvalidInput {
                field: "salary".to_string(),
                message: SALARY_MESSAGE.to_string(),
            })
        }
    }
}

/// Parses a pay frequency typed by the user.
///
/// Accepts `W`, `F` or `M` (or the full names) in any case. Numbers are
/// rejected even though they might name a frequency's position.
pub fn parse_frequency(input: &str) -> std::result::Result<PayFrequency, EngineError> {
    PayFrequency::from_code(input).map_err(|_| {
        debug!(input = %input.trim(), "Rejected pay frequency input");
        EngineError::InvalidInput {
            field: "frequency".to_string(),
            message: FREQUENCY_MESSAGE.to_string(),
        }
    })
}

/// Reads the two calculation inputs, prompting for any not supplied.
pub struct InputProvider<R, W> {
    reader: R,
    writer: W,
    color_enabled: bool,
}

impl<R: BufRead, W: Write> InputProvider<R, W> {
    /// Creates a provider reading answers from `reader` and writing prompts
    /// to `writer`.
    pub fn new(reader: R, writer: W, color_enabled: bool) -> Self {
        Self {
            reader,
            writer,
            color_enabled,
        }
    }

    /// Returns the salary package from `preset` or by prompting.
    pub fn salary(&mut self, preset: Option<&str>) -> Result<Decimal> {
        let answer = match preset {
            Some(value) => value.to_string(),
            None => self.ask("\nEnter your salary package amount: ")?,
        };
        Ok(parse_salary(&answer)?)
    }

    /// Returns the pay frequency from `preset` or by prompting.
    pub fn frequency(&mut self, preset: Option<&str>) -> Result<PayFrequency> {
        let answer = match preset {
            Some(value) => value.to_string(),
            None => self.ask(
                "Enter your pay frequency (W for weekly, F for fortnightly, M for monthly): ",
            )?,
        };
        Ok(parse_frequency(&answer)?)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        if self.color_enabled {
            write!(self.writer, "{}", question.cyan())?;
        } else {
            write!(self.writer, "{}", question)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}
