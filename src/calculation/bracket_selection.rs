//! Tax bracket selection.
//!
//! Brackets are not required to be sorted or to partition the income range.
//! The lowest qualifying bracket always wins.

use rust_decimal::Decimal;

use crate::config::TaxBracketConfig;

/// Selects the bracket that applies to a taxable income.
///
/// Among all brackets whose inclusive `bracket_end` is at or above the income,
/// the one with the smallest `bracket_end` is returned. Brackets with equal
/// ends resolve to the earliest in list order. Returns `None` when no bracket
/// reaches the income, which only happens for an empty or truncated list.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::select_bracket;
/// use salary_calculator::config::{ApplicableTo, TaxBracketConfig, UNBOUNDED_BRACKET_END};
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracketConfig {
///         bracket_start: 18200,
///         bracket_end: UNBOUNDED_BRACKET_END,
///         rate: Decimal::new(19, 2),
///         flat_addition: Decimal::ZERO,
///         applicable_to: ApplicableTo::ExcessIncome,
///     },
///     TaxBracketConfig {
///         bracket_start: 0,
///         bracket_end: 18200,
///         rate: Decimal::ZERO,
///         flat_addition: Decimal::ZERO,
///         applicable_to: ApplicableTo::ExcessIncome,
///     },
/// ];
///
/// let bracket = select_bracket(Decimal::from(18_200), &brackets).unwrap();
/// assert_eq!(bracket.bracket_end, 18200);
/// ```
pub fn select_bracket(
    taxable_income: Decimal,
    brackets: &[TaxBracketConfig],
) -> Option<&TaxBracketConfig> {
    brackets
        .iter()
        .filter(|b| taxable_income <= Decimal::from(b.bracket_end))
        .min_by_key(|b| b.bracket_end)
}
