//! Core data models for the salary calculator.
//!
//! This module contains the domain models produced and consumed by the
//! calculation engine.

mod calculation_result;
mod pay_frequency;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, SalaryBreakdown, TaxCalculationResult,
};
pub use pay_frequency::PayFrequency;
