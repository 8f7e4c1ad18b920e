//! Pay frequency model.
//!
//! This module defines the [`PayFrequency`] enum, the period a pay packet
//! covers, and its conversion from the short codes users type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// How often a pay packet is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Every week (code `W`).
    Weekly,
    /// Every two weeks (code `F`).
    Fortnightly,
    /// Every calendar month (code `M`).
    Monthly,
}

impl PayFrequency {
    /// All supported frequencies in display order.
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Weekly,
        PayFrequency::Fortnightly,
        PayFrequency::Monthly,
    ];

    /// Returns the single letter code for this frequency.
    pub fn code(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "W",
            PayFrequency::Fortnightly => "F",
            PayFrequency::Monthly => "M",
        }
    }

    /// Returns the lowercase name for this frequency.
    pub fn name(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Fortnightly => "fortnightly",
            PayFrequency::Monthly => "monthly",
        }
    }

    /// Converts a frequency code into a `PayFrequency`.
    ///
    /// Accepts the letter codes and the full names, ignoring case and
    /// surrounding whitespace. Numeric representations are never accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::models::PayFrequency;
    ///
    /// assert_eq!(PayFrequency::from_code("f").unwrap(), PayFrequency::Fortnightly);
    /// assert_eq!(PayFrequency::from_code("Monthly").unwrap(), PayFrequency::Monthly);
    /// assert!(PayFrequency::from_code("1").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, EngineError> {
        let trimmed = code.trim();
        PayFrequency::ALL
            .into_iter()
            .find(|f| {
                trimmed.eq_ignore_ascii_case(f.code()) || trimmed.eq_ignore_ascii_case(f.name())
            })
            .ok_or_else(|| EngineError::UnsupportedOption {
                option: trimmed.to_string(),
            })
    }
}

impl FromStr for PayFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayFrequency::from_code(s)
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
