//! Calculation logic for the salary calculator.
//!
//! This module contains the calculation functions for determining net pay:
//! splitting a gross package into taxable income and contribution, selecting
//! tax brackets, evaluating deductions, converting net income into a pay
//! packet, and the [`TaxCalculator`] pipeline that runs them in order.

mod bracket_selection;
mod calculator;
mod deductions;
mod income_split;
mod pay_packet;

pub use bracket_selection::select_bracket;
pub use calculator::TaxCalculator;
pub use deductions::{
    DEDUCTIONS_SECTION, DeductionEvaluation, calculate_deductions, evaluate_deduction,
};
pub use income_split::{IncomeSplit, IncomeSplitResult, split_income, split_income_with_audit};
pub use pay_packet::{
    DAYS_PER_YEAR, MONTHS_PER_YEAR, PayPacketResult, calculate_pay_packet,
    calculate_pay_packet_with_audit, round_to_cents,
};
