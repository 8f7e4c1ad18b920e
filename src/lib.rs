//! Net pay calculator for Australian salary packages
//!
//! This crate splits a yearly salary package into superannuation and taxable
//! income, evaluates the configured deductions (income tax, Medicare levy and
//! similar) against their tax brackets, and converts the resulting net income
//! into a weekly, fortnightly or monthly pay packet.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
