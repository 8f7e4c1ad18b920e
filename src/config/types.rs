//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The upper bound used when a bracket does not declare `bracket_end`.
pub const UNBOUNDED_BRACKET_END: u64 = u64::MAX;

/// Rounding rule applied to a computed deduction amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingStrategy {
    /// Keep the computed amount as is.
    #[default]
    None,
    /// Round the amount up to the next whole dollar.
    #[serde(alias = "up_to_nearest_dollar")]
    UpToWholeUnit,
}

/// Which part of the taxable income a bracket rate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicableTo {
    /// The rate applies to the income above `bracket_start` only.
    #[default]
    ExcessIncome,
    /// The rate applies to the whole taxable income.
    WholeIncome,
}

/// A single tax bracket within a deduction.
///
/// Bounds are inclusive whole dollar amounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracketConfig {
    /// The start of the bracket, e.g. 18200.
    pub bracket_start: u64,
    /// The end of the bracket, e.g. 37000. Unbounded when omitted.
    #[serde(default = "unbounded")]
    pub bracket_end: u64,
    /// The rate applied to the affected income.
    pub rate: Decimal,
    /// Flat dollar amount added regardless of rate.
    #[serde(default)]
    pub flat_addition: Decimal,
    /// Whether the rate applies to the whole income or just the excess.
    #[serde(default)]
    pub applicable_to: ApplicableTo,
}

fn unbounded() -> u64 {
    UNBOUNDED_BRACKET_END
}

impl TaxBracketConfig {
    /// Returns true if this bracket has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.bracket_end == UNBOUNDED_BRACKET_END
    }

    /// Returns true if the two brackets share more than a boundary value.
    ///
    /// Adjacent brackets conventionally repeat the boundary (one ends at
    /// 37000, the next starts at 37000) so that the excess is measured from
    /// the right base. That is not treated as an overlap.
    pub fn overlaps(&self, other: &TaxBracketConfig) -> bool {
        self.bracket_start < other.bracket_end && other.bracket_start < self.bracket_end
    }
}

/// A named deduction evaluated against the taxable income.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeductionConfig {
    /// The name of the deduction, displayed to the user.
    pub name: String,
    /// Any rounding rule which applies to this deduction.
    #[serde(default)]
    pub rounding: Option<RoundingStrategy>,
    /// The brackets of this deduction.
    #[serde(default)]
    pub tax_brackets: Vec<TaxBracketConfig>,
}

impl DeductionConfig {
    /// Returns the effective rounding rule, treating an absent rule as `None`.
    pub fn rounding_strategy(&self) -> RoundingStrategy {
        self.rounding.unwrap_or_default()
    }

    /// Returns index pairs of brackets whose ranges overlap.
    ///
    /// Overlapping configurations still calculate because the lowest matching
    /// bracket wins, but the other bracket is partly unreachable.
    pub fn overlapping_brackets(&self) -> Vec<(usize, usize)> {
        let brackets = &self.tax_brackets;
        let mut pairs = Vec::new();
        for (i, a) in brackets.iter().enumerate() {
            for (j, b) in brackets.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Tax configuration section of the settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxConfig {
    /// The contribution percentage, usually 9.5% (stored as 0.095).
    #[serde(alias = "super_percentage")]
    pub contribution_rate: Decimal,
    /// Deductions in display order.
    #[serde(default)]
    pub deductions: Vec<DeductionConfig>,
}

/// Display settings for monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Number of decimal places to use when displaying amounts.
    #[serde(default = "default_decimal_places")]
    pub displayed_decimal_places: u32,
    /// Symbol placed before every amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_decimal_places() -> u32 {
    2
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            displayed_decimal_places: default_decimal_places(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// The complete settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Tax configuration.
    pub tax: TaxConfig,
    /// Display configuration.
    #[serde(default)]
    pub format: FormatConfig,
}
