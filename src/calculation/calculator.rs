//! The salary calculation pipeline.
//!
//! [`TaxCalculator`] binds the pure calculation functions to one immutable
//! tax configuration and runs them in order, collecting an audit trace.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::info;

use crate::config::TaxConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayFrequency, SalaryBreakdown, TaxCalculationResult,
};

use super::{
    IncomeSplit, calculate_deductions, calculate_pay_packet, calculate_pay_packet_with_audit,
    evaluate_deduction, split_income, split_income_with_audit,
};

/// Calculates net pay for a fixed tax configuration.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::TaxCalculator;
/// use salary_calculator::config::TaxConfig;
/// use salary_calculator::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let calculator = TaxCalculator::new(TaxConfig {
///     contribution_rate: Decimal::ZERO,
///     deductions: vec![],
/// });
///
/// let breakdown = calculator.calculate(Decimal::from(60_000), PayFrequency::Monthly)?;
/// assert_eq!(breakdown.net_income, Decimal::from(60_000));
/// assert_eq!(breakdown.pay_packet, Decimal::from(5_000));
/// # Ok::<(), salary_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    config: TaxConfig,
}

impl TaxCalculator {
    /// Creates a calculator for the given tax configuration.
    pub fn new(config: TaxConfig) -> Self {
        Self { config }
    }

    /// Returns the tax configuration in use.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Splits a gross package using the configured contribution rate.
    pub fn split_income(&self, gross_yearly_income: Decimal) -> IncomeSplit {
        split_income(gross_yearly_income, self.config.contribution_rate)
    }

    /// Evaluates the configured deductions against a raw taxable income.
    pub fn calculate_deductions(
        &self,
        raw_taxable_income: Decimal,
    ) -> EngineResult<Vec<TaxCalculationResult>> {
        calculate_deductions(raw_taxable_income, &self.config.deductions)
    }

    /// Converts net annual income into a pay packet.
    pub fn calculate_pay_packet(&self, net_annual_income: Decimal, frequency: PayFrequency) -> Decimal {
        calculate_pay_packet(net_annual_income, frequency)
    }

    /// Runs the full calculation for a gross package and pay frequency.
    ///
    /// Steps, each recorded in the audit trace:
    /// 1. Split the package into taxable income and contribution
    /// 2. Evaluate every deduction against the taxable income
    /// 3. Subtract contribution and deductions from the package
    /// 4. Convert the net income into a pay packet
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the gross package is not positive
    /// - `TaxConfiguration` if a deduction has no bracket for the income
    pub fn calculate(
        &self,
        gross_yearly_income: Decimal,
        frequency: PayFrequency,
    ) -> EngineResult<SalaryBreakdown> {
        if gross_yearly_income <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "salary".to_string(),
                message: format!(
                    "salary package must be positive, got {}",
                    gross_yearly_income
                ),
            });
        }

        let start_time = Instant::now();
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut step_number: u32 = 1;

        let split_result =
            split_income_with_audit(gross_yearly_income, self.config.contribution_rate, step_number);
        let split = split_result.split;
        steps.push(split_result.audit_step);
        step_number += 1;

        let mut deductions = Vec::with_capacity(self.config.deductions.len());
        for deduction in &self.config.deductions {
            let evaluation = evaluate_deduction(split.taxable_income, deduction, step_number)?;
            deductions.push(evaluation.result);
            steps.push(evaluation.audit_step);
            step_number += 1;
        }

        let total_deductions: Decimal = deductions.iter().map(|d| d.value).sum();
        let net_income = gross_yearly_income - split.contribution_amount - total_deductions;
        steps.push(AuditStep {
            step_number,
            rule_id: "net_income".to_string(),
            rule_name: "Net Income".to_string(),
            input: serde_json::json!({
                "gross_income": gross_yearly_income.normalize().to_string(),
                "contribution": split.contribution_amount.to_string(),
                "total_deductions": total_deductions.normalize().to_string()
            }),
            output: serde_json::json!({
                "net_income": net_income.to_string()
            }),
            reasoning: format!(
                "${} - ${} - ${} = ${}",
                gross_yearly_income.normalize(),
                split.contribution_amount.round_dp(2),
                total_deductions.normalize(),
                net_income.round_dp(2)
            ),
        });
        step_number += 1;

        let packet_result = calculate_pay_packet_with_audit(net_income, frequency, step_number);
        steps.push(packet_result.audit_step);

        let duration_us = start_time.elapsed().as_micros() as u64;
        info!(
            %gross_yearly_income,
            %frequency,
            pay_packet = %packet_result.pay_packet,
            duration_us,
            "Salary calculation completed"
        );

        Ok(SalaryBreakdown {
            gross_income: gross_yearly_income,
            contribution: split.contribution_amount,
            taxable_income: split.taxable_income,
            deductions,
            net_income,
            frequency,
            pay_packet: packet_result.pay_packet,
            audit_trace: AuditTrace {
                steps,
                warnings: self.configuration_warnings(),
                duration_us,
            },
        })
    }

    /// Lists configuration quirks that calculate but may be unintended.
    fn configuration_warnings(&self) -> Vec<AuditWarning> {
        let mut warnings = Vec::new();
        for deduction in &self.config.deductions {
            for (first, second) in deduction.overlapping_brackets() {
                warnings.push(AuditWarning {
                    code: "OVERLAPPING_BRACKETS".to_string(),
                    message: format!(
                        "Brackets {} and {} of '{}' overlap; the bracket with the lower end is used",
                        first + 1,
                        second + 1,
                        deduction.name
                    ),
                    severity: "medium".to_string(),
                });
            }
        }
        warnings
    }
}
