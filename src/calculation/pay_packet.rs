//! Pay packet conversion.
//!
//! Converts net annual income into the amount paid each period.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AuditStep, PayFrequency};

/// Days in a year used for weekly and fortnightly conversion.
pub const DAYS_PER_YEAR: u32 = 365;

/// Months in a year used for monthly conversion.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The result of a pay packet conversion, including the audit step.
#[derive(Debug, Clone)]
pub struct PayPacketResult {
    /// The amount paid each period.
    pub pay_packet: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Rounds a decimal value to cents, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("123.455").unwrap()), Decimal::from_str("123.46").unwrap());
/// assert_eq!(round_to_cents(Decimal::from_str("-123.455").unwrap()), Decimal::from_str("-123.46").unwrap());
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts net annual income into a pay packet for the given frequency.
///
/// - weekly: `net / 365 * 7`
/// - fortnightly: `net / 365 * 14`
/// - monthly: `net / 12`
///
/// The result is rounded to cents, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::calculate_pay_packet;
/// use salary_calculator::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let monthly = calculate_pay_packet(Decimal::from(60_000), PayFrequency::Monthly);
/// assert_eq!(monthly, Decimal::from(5_000));
/// ```
pub fn calculate_pay_packet(net_annual_income: Decimal, frequency: PayFrequency) -> Decimal {
    let days = Decimal::from(DAYS_PER_YEAR);
    let amount = match frequency {
        PayFrequency::Weekly => net_annual_income / days * Decimal::from(7),
        PayFrequency::Fortnightly => net_annual_income / days * Decimal::from(14),
        PayFrequency::Monthly => net_annual_income / Decimal::from(MONTHS_PER_YEAR),
    };

    round_to_cents(amount)
}

/// Converts net income and records the decision as an audit step.
pub fn calculate_pay_packet_with_audit(
    net_annual_income: Decimal,
    frequency: PayFrequency,
    step_number: u32,
) -> PayPacketResult {
    let pay_packet = calculate_pay_packet(net_annual_income, frequency);

    let formula = match frequency {
        PayFrequency::Weekly => format!("/ {} x 7", DAYS_PER_YEAR),
        PayFrequency::Fortnightly => format!("/ {} x 14", DAYS_PER_YEAR),
        PayFrequency::Monthly => format!("/ {}", MONTHS_PER_YEAR),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_packet".to_string(),
        rule_name: "Pay Packet Conversion".to_string(),
        input: serde_json::json!({
            "net_income": net_annual_income.to_string(),
            "frequency": frequency.name()
        }),
        output: serde_json::json!({
            "pay_packet": pay_packet.to_string()
        }),
        reasoning: format!(
            "${} {} = ${} per {} pay",
            round_to_cents(net_annual_income),
            formula,
            pay_packet,
            frequency
        ),
    };

    PayPacketResult {
        pay_packet,
        audit_step,
    }
}
