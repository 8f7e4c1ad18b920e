//! Rendering calculation results for the console.

use colored::{Color, Colorize};

use crate::format::CurrencyFormatter;
use crate::models::SalaryBreakdown;

use super::error::Result;

/// Renders a [`SalaryBreakdown`] as console text.
pub struct ReportWriter {
    formatter: CurrencyFormatter,
    color_enabled: bool,
}

impl ReportWriter {
    /// Creates a report writer.
    pub fn new(formatter: CurrencyFormatter, color_enabled: bool) -> Self {
        Self {
            formatter,
            color_enabled,
        }
    }

    /// Renders the salary breakdown.
    ///
    /// The deductions heading is only shown when there are deductions.
    pub fn render(&self, breakdown: &SalaryBreakdown) -> String {
        let money = |value| self.formatter.to_currency(value);
        let mut lines = Vec::new();

        lines.push(format!("Gross package: {}", money(breakdown.gross_income)));
        lines.push(format!("Superannuation: {}", money(breakdown.contribution)));
        lines.push(String::new());

        lines.push(format!("Taxable income: {}", money(breakdown.taxable_income)));
        lines.push(String::new());

        if !breakdown.deductions.is_empty() {
            lines.push("Deductions:".to_string());
        }
        for deduction in &breakdown.deductions {
            lines.push(format!(" * {}: {}", deduction.name, money(deduction.value)));
        }
        lines.push(String::new());

        lines.push(format!("Net income: {}", money(breakdown.net_income)));
        lines.push(format!(
            "Pay packet: {} ({})",
            self.paint(&money(breakdown.pay_packet), Color::Green),
            breakdown.frequency
        ));

        for warning in &breakdown.audit_trace.warnings {
            lines.push(self.paint(&format!("Warning: {}", warning.message), Color::Yellow));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Renders the audit trace as pretty JSON.
    pub fn render_audit(&self, breakdown: &SalaryBreakdown) -> Result<String> {
        Ok(serde_json::to_string_pretty(&breakdown.audit_trace)?)
    }

    /// Renders a user-facing error message.
    pub fn render_error(&self, message: &str) -> String {
        format!("\n{}\n", self.paint(message, Color::Red))
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
