//! Gross income split.
//!
//! A salary package includes the contribution on top of taxable income, so
//! the package is divided by `1 + rate` to recover the taxable part.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Taxable income and contribution recovered from a gross package.
///
/// Both values carry full precision and sum to the gross package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeSplit {
    /// The yearly income subject to deductions.
    pub taxable_income: Decimal,
    /// The yearly contribution amount.
    pub contribution_amount: Decimal,
}

/// The result of splitting income, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeSplitResult {
    /// The split amounts.
    pub split: IncomeSplit,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits a gross yearly package into taxable income and contribution.
///
/// `taxable_income = gross / (1 + rate)` and
/// `contribution_amount = taxable_income * rate`. No rounding is applied.
///
/// The caller guarantees `gross_yearly_income > 0` and
/// `contribution_rate >= 0`.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::split_income;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_income(Decimal::from(65_000), Decimal::from_str("0.095").unwrap());
/// assert_eq!(split.taxable_income.round_dp(2), Decimal::from_str("59360.73").unwrap());
/// assert_eq!(split.contribution_amount.round_dp(2), Decimal::from_str("5639.27").unwrap());
/// ```
pub fn split_income(gross_yearly_income: Decimal, contribution_rate: Decimal) -> IncomeSplit {
    let taxable_income = gross_yearly_income / (Decimal::ONE + contribution_rate);
    let contribution_amount = taxable_income * contribution_rate;

    IncomeSplit {
        taxable_income,
        contribution_amount,
    }
}

/// Splits income and records the decision as an audit step.
pub fn split_income_with_audit(
    gross_yearly_income: Decimal,
    contribution_rate: Decimal,
    step_number: u32,
) -> IncomeSplitResult {
    let split = split_income(gross_yearly_income, contribution_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_split".to_string(),
        rule_name: "Gross Income Split".to_string(),
        input: serde_json::json!({
            "gross_income": gross_yearly_income.normalize().to_string(),
            "contribution_rate": contribution_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_income": split.taxable_income.to_string(),
            "contribution": split.contribution_amount.to_string()
        }),
        reasoning: format!(
            "${} / (1 + {}) = ${} taxable, ${} contribution",
            gross_yearly_income.normalize(),
            contribution_rate.normalize(),
            split.taxable_income.round_dp(2),
            split.contribution_amount.round_dp(2)
        ),
    };

    IncomeSplitResult { split, audit_step }
}
