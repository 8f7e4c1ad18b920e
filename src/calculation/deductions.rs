//! Deduction evaluation.
//!
//! Every configured deduction is evaluated independently against the floored
//! taxable income using the bracket that [`select_bracket`] picks.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{ApplicableTo, DeductionConfig, RoundingStrategy};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, TaxCalculationResult};

use super::select_bracket;

/// Configuration section named in errors raised while evaluating deductions.
pub const DEDUCTIONS_SECTION: &str = "tax.deductions";

/// The result of evaluating one deduction, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionEvaluation {
    /// The named deduction amount.
    pub result: TaxCalculationResult,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Evaluates a single deduction against a raw taxable income.
///
/// The income is floored to whole dollars, the lowest matching bracket is
/// selected, and `flat_addition + affected_income * rate` is computed, where
/// the affected income is either the whole income or the excess above
/// `bracket_start`. Deductions configured with `up_to_whole_unit` rounding
/// are rounded up to the next dollar.
///
/// # Errors
///
/// Returns `TaxConfiguration` when no bracket reaches the income.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::evaluate_deduction;
/// use salary_calculator::config::{
///     ApplicableTo, DeductionConfig, RoundingStrategy, TaxBracketConfig, UNBOUNDED_BRACKET_END,
/// };
/// use rust_decimal::Decimal;
///
/// let medicare = DeductionConfig {
///     name: "Medicare levy".to_string(),
///     rounding: Some(RoundingStrategy::UpToWholeUnit),
///     tax_brackets: vec![TaxBracketConfig {
///         bracket_start: 26669,
///         bracket_end: UNBOUNDED_BRACKET_END,
///         rate: Decimal::new(2, 2),
///         flat_addition: Decimal::ZERO,
///         applicable_to: ApplicableTo::WholeIncome,
///     }],
/// };
///
/// let evaluation = evaluate_deduction(Decimal::from(200_000), &medicare, 1)?;
/// assert_eq!(evaluation.result.value, Decimal::from(4_000));
/// # Ok::<(), salary_calculator::error::EngineError>(())
/// ```
pub fn evaluate_deduction(
    raw_taxable_income: Decimal,
    deduction: &DeductionConfig,
    step_number: u32,
) -> EngineResult<DeductionEvaluation> {
    let taxable_income = raw_taxable_income.floor();

    let bracket = select_bracket(taxable_income, &deduction.tax_brackets).ok_or_else(|| {
        EngineError::TaxConfiguration {
            section: DEDUCTIONS_SECTION.to_string(),
            message: format!(
                "no tax bracket found for '{}' at income {}",
                deduction.name,
                taxable_income.normalize()
            ),
        }
    })?;

    let bracket_start = Decimal::from(bracket.bracket_start);
    let affected_income = match bracket.applicable_to {
        ApplicableTo::WholeIncome => taxable_income,
        ApplicableTo::ExcessIncome => taxable_income - bracket_start,
    };

    let computed = bracket.flat_addition + affected_income * bracket.rate;
    let rounding = deduction.rounding_strategy();
    let value = match rounding {
        RoundingStrategy::UpToWholeUnit => computed.ceil(),
        RoundingStrategy::None => computed,
    };

    debug!(
        deduction = %deduction.name,
        bracket_start = bracket.bracket_start,
        bracket_end = bracket.bracket_end,
        %affected_income,
        %value,
        "Evaluated deduction"
    );

    let bracket_end = if bracket.is_unbounded() {
        "unbounded".to_string()
    } else {
        bracket.bracket_end.to_string()
    };
    let applicable_to = match bracket.applicable_to {
        ApplicableTo::WholeIncome => "whole_income",
        ApplicableTo::ExcessIncome => "excess_income",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "deduction".to_string(),
        rule_name: deduction.name.clone(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "bracket_start": bracket.bracket_start,
            "bracket_end": bracket_end,
            "rate": bracket.rate.normalize().to_string(),
            "flat_addition": bracket.flat_addition.normalize().to_string(),
            "applicable_to": applicable_to
        }),
        output: serde_json::json!({
            "value": value.normalize().to_string(),
            "rounded_up": rounding == RoundingStrategy::UpToWholeUnit
        }),
        reasoning: format!(
            "${} + ${} x {} = ${}",
            bracket.flat_addition.normalize(),
            affected_income.normalize(),
            bracket.rate.normalize(),
            value.normalize()
        ),
    };

    Ok(DeductionEvaluation {
        result: TaxCalculationResult {
            name: deduction.name.clone(),
            value,
        },
        audit_step,
    })
}

/// Evaluates every deduction in order against a raw taxable income.
///
/// The output keeps the input order. The first failing deduction aborts the
/// whole evaluation; no partial results are returned.
///
/// # Errors
///
/// Returns `TaxConfiguration` if any deduction has no bracket reaching the
/// income.
pub fn calculate_deductions(
    raw_taxable_income: Decimal,
    deductions: &[DeductionConfig],
) -> EngineResult<Vec<TaxCalculationResult>> {
    deductions
        .iter()
        .enumerate()
        .map(|(i, deduction)| {
            evaluate_deduction(raw_taxable_income, deduction, i as u32 + 1)
                .map(|evaluation| evaluation.result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TaxBracketConfig, UNBOUNDED_BRACKET_END};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(
        start: u64,
        end: u64,
        rate: &str,
        flat_addition: &str,
        applicable_to: ApplicableTo,
    ) -> TaxBracketConfig {
        TaxBracketConfig {
            bracket_start: start,
            bracket_end: end,
            rate: dec(rate),
            flat_addition: dec(flat_addition),
            applicable_to,
        }
    }

    fn deduction(
        name: &str,
        rounding: Option<RoundingStrategy>,
        tax_brackets: Vec<TaxBracketConfig>,
    ) -> DeductionConfig {
        DeductionConfig {
            name: name.to_string(),
            rounding,
            tax_brackets,
        }
    }

    fn income_tax() -> DeductionConfig {
        use ApplicableTo::ExcessIncome;
        deduction(
            "Income tax",
            Some(RoundingStrategy::UpToWholeUnit),
            vec![
                bracket(0, 18200, "0", "0", ExcessIncome),
                bracket(18200, 37000, "0.19", "0", ExcessIncome),
                bracket(37000, 90000, "0.325", "3572", ExcessIncome),
                bracket(90000, 180000, "0.37", "20797", ExcessIncome),
                bracket(180000, UNBOUNDED_BRACKET_END, "0.45", "54097", ExcessIncome),
            ],
        )
    }

    /// DE-001: low income medicare pays nothing
    #[test]
    fn test_medicare_low_income_pays_nothing() {
        let medicare = deduction(
            "Medicare",
            Some(RoundingStrategy::UpToWholeUnit),
            vec![bracket(0, 21335, "0", "0", ApplicableTo::ExcessIncome)],
        );

        let results = calculate_deductions(dec("10000"), &[medicare]).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].value, Decimal::ZERO);
    }

    /// DE-002: high income medicare pays on whole income
    #[test]
    fn test_medicare_high_income_pays_on_whole_income() {
        let medicare = deduction(
            "Medicare",
            Some(RoundingStrategy::UpToWholeUnit),
            vec![bracket(
                26669,
                UNBOUNDED_BRACKET_END,
                "0.02",
                "0",
                ApplicableTo::WholeIncome,
            )],
        );

        let results = calculate_deductions(dec("200000"), &[medicare]).unwrap();

        assert_eq!(results[0].name, "Medicare");
        assert_eq!(results[0].value, dec("4000"));
    }

    /// DE-003: excess income uses bracket start and flat addition
    #[test]
    fn test_excess_income_with_flat_addition() {
        let results = calculate_deductions(dec("59360"), &[income_tax()]).unwrap();

        // 3572 + (59360 - 37000) x 0.325 = 10839
        assert_eq!(results[0].value, dec("10839"));
    }

    /// DE-004: income is floored before evaluation
    #[test]
    fn test_income_is_floored_before_evaluation() {
        let levy = deduction(
            "Levy",
            None,
            vec![bracket(0, UNBOUNDED_BRACKET_END, "0.1", "0", ApplicableTo::WholeIncome)],
        );

        let results = calculate_deductions(dec("1000.99"), &[levy]).unwrap();

        assert_eq!(results[0].value, dec("100"));
    }

    /// DE-005: flooring decides the bracket on a boundary
    #[test]
    fn test_fractional_income_above_boundary_stays_in_lower_bracket() {
        let results = calculate_deductions(dec("37000.75"), &[income_tax()]).unwrap();

        // floor(37000.75) = 37000 falls in the 18200..37000 bracket
        assert_eq!(results[0].value, dec("3572"));
    }

    /// DE-006: rounding up applies only when configured
    #[test]
    fn test_round_up_only_when_configured() {
        let brackets = vec![bracket(0, UNBOUNDED_BRACKET_END, "0.015", "0", ApplicableTo::WholeIncome)];
        let rounded = deduction("Rounded", Some(RoundingStrategy::UpToWholeUnit), brackets.clone());
        let explicit_none = deduction("None", Some(RoundingStrategy::None), brackets.clone());
        let absent = deduction("Absent", None, brackets);

        let results =
            calculate_deductions(dec("1001"), &[rounded, explicit_none, absent]).unwrap();

        assert_eq!(results[0].value, dec("16"));
        assert_eq!(results[1].value, dec("15.015"));
        assert_eq!(results[2].value, dec("15.015"));
    }

    /// DE-007: empty bracket list is a configuration error
    #[test]
    fn test_empty_brackets_return_tax_configuration_error() {
        let empty = deduction("Empty", None, vec![]);

        match calculate_deductions(dec("50000"), &[empty]) {
            Err(EngineError::TaxConfiguration { section, message }) => {
                assert_eq!(section, DEDUCTIONS_SECTION);
                assert!(message.contains("Empty"));
                assert!(message.contains("50000"));
            }
            other => panic!("Expected TaxConfiguration error, got {:?}", other),
        }
    }

    /// DE-008: income above every bracket is a configuration error
    #[test]
    fn test_income_above_all_brackets_returns_error() {
        let capped = deduction(
            "Capped",
            None,
            vec![bracket(0, 18200, "0", "0", ApplicableTo::ExcessIncome)],
        );

        assert!(matches!(
            calculate_deductions(dec("18201"), &[capped]),
            Err(EngineError::TaxConfiguration { .. })
        ));
    }

    /// DE-009: a failing deduction aborts the whole evaluation
    #[test]
    fn test_error_aborts_remaining_deductions() {
        let deductions = vec![income_tax(), deduction("Empty", None, vec![]), income_tax()];

        assert!(calculate_deductions(dec("59360"), &deductions).is_err());
    }

    #[test]
    fn test_results_keep_configuration_order() {
        let levy = deduction(
            "Levy",
            None,
            vec![bracket(0, UNBOUNDED_BRACKET_END, "0", "0", ApplicableTo::ExcessIncome)],
        );

        let results = calculate_deductions(dec("59360"), &[levy, income_tax()]).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Levy", "Income tax"]);
    }

    #[test]
    fn test_no_deductions_yield_empty_results() {
        assert!(calculate_deductions(dec("59360"), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_audit_step_describes_bracket() {
        let evaluation = evaluate_deduction(dec("59360.73"), &income_tax(), 2).unwrap();
        let step = evaluation.audit_step;

        assert_eq!(step.step_number, 2);
        assert_eq!(step.rule_id, "deduction");
        assert_eq!(step.rule_name, "Income tax");
        assert_eq!(step.input["taxable_income"], "59360");
        assert_eq!(step.input["bracket_start"], 37000);
        assert_eq!(step.input["bracket_end"], "90000");
        assert_eq!(step.input["applicable_to"], "excess_income");
        assert_eq!(step.output["value"], "10839");
        assert_eq!(step.output["rounded_up"], true);
        assert!(step.reasoning.contains("$3572"));
        assert!(step.reasoning.contains("$22360"));
        assert!(step.reasoning.contains("0.325"));
    }

    #[test]
    fn test_audit_step_reports_unbounded_end() {
        let evaluation = evaluate_deduction(dec("250000"), &income_tax(), 1).unwrap();

        assert_eq!(evaluation.audit_step.input["bracket_end"], "unbounded");
        // 54097 + 70000 x 0.45 = 85597
        assert_eq!(evaluation.result.value, dec("85597"));
    }

    proptest! {
        #[test]
        fn prop_whole_income_ignores_bracket_start(
            income in 0u64..10_000_000u64,
            start in 0u64..10_000_000u64,
            rate_thousandths in 0i64..1000i64,
            flat in 0i64..100_000i64,
        ) {
            let rate = Decimal::new(rate_thousandths, 3);
            let levy = DeductionConfig {
                name: "Levy".to_string(),
                rounding: None,
                tax_brackets: vec![TaxBracketConfig {
                    bracket_start: start,
                    bracket_end: UNBOUNDED_BRACKET_END,
                    rate,
                    flat_addition: Decimal::from(flat),
                    applicable_to: ApplicableTo::WholeIncome,
                }],
            };

            let results = calculate_deductions(Decimal::from(income), &[levy]).unwrap();
            prop_assert_eq!(results[0].value, Decimal::from(flat) + Decimal::from(income) * rate);
        }

        #[test]
        fn prop_excess_income_measured_from_bracket_start(
            start in 0u64..1_000_000u64,
            excess in 0u64..1_000_000u64,
            fraction_cents in 0i64..100i64,
            rate_thousandths in 0i64..1000i64,
        ) {
            let rate = Decimal::new(rate_thousandths, 3);
            let levy = DeductionConfig {
                name: "Levy".to_string(),
                rounding: None,
                tax_brackets: vec![TaxBracketConfig {
                    bracket_start: start,
                    bracket_end: UNBOUNDED_BRACKET_END,
                    rate,
                    flat_addition: Decimal::ZERO,
                    applicable_to: ApplicableTo::ExcessIncome,
                }],
            };
            let income = Decimal::from(start + excess) + Decimal::new(fraction_cents, 2);

            let results = calculate_deductions(income, &[levy]).unwrap();
            prop_assert_eq!(results[0].value, Decimal::from(excess) * rate);
        }
    }
}
