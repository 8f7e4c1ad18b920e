//! Calculation result models for the salary calculator.
//!
//! This module contains the [`TaxCalculationResult`] produced for every
//! deduction, and the [`SalaryBreakdown`] summarising a full calculation
//! together with its audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// The amount computed for one configured deduction.
///
/// # Example
///
/// ```
/// use salary_calculator::models::TaxCalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = TaxCalculationResult {
///     name: "Medicare levy".to_string(),
///     value: Decimal::new(1188, 0),
/// };
/// assert_eq!(result.value, Decimal::new(1188, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// The deduction name from configuration.
    pub name: String,
    /// The computed deduction amount.
    pub value: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag configuration that calculated fine but may not mean what
/// its author intended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary calculation.
///
/// Amounts are kept at full precision; only the pay packet is rounded.
/// Formatting for display is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The gross yearly salary package.
    pub gross_income: Decimal,
    /// The yearly contribution set aside from the package.
    pub contribution: Decimal,
    /// The yearly income subject to deductions.
    pub taxable_income: Decimal,
    /// Deductions in configuration order.
    pub deductions: Vec<TaxCalculationResult>,
    /// Gross income less contribution and deductions.
    pub net_income: Decimal,
    /// The frequency the pay packet was computed for.
    pub frequency: PayFrequency,
    /// Net income per pay period, rounded to cents.
    pub pay_packet: Decimal,
    /// Record of how the figures were produced.
    pub audit_trace: AuditTrace,
}

impl SalaryBreakdown {
    /// Returns the sum of all deduction amounts.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().map(|d| d.value).sum()
    }
}
