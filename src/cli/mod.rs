//! Command line front end for the salary calculator.
//!
//! This module wires the settings file, the input provider, the calculation
//! engine and the report writer together. The binary is a thin wrapper that
//! calls [`run`] with the process's stdin and stdout.

mod args;
mod error;
mod prompt;
mod report;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::calculation::TaxCalculator;
use crate::config::{ConfigLoader, FormatConfig};
use crate::format::CurrencyFormatter;

pub use args::Cli;
pub use error::{CliError, Result};
pub use prompt::{InputProvider, parse_frequency, parse_salary};
pub use report::ReportWriter;

/// Runs one calculation session.
///
/// User-facing problems (bad input, invalid configuration) are written to
/// `output` as a message and the session ends with `Ok(false)`. Unexpected
/// failures such as broken I/O are returned as errors.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut output: W) -> Result<bool> {
    let color_enabled = !cli.no_color;

    match calculate(cli, input, &mut output, color_enabled) {
        Ok(()) => Ok(true),
        Err(error) => match error.user_message() {
            Some(message) => {
                debug!(%error, "Calculation session ended with a user facing error");
                let formatter = CurrencyFormatter::new(&FormatConfig::default());
                let writer = ReportWriter::new(formatter, color_enabled);
                write!(output, "{}", writer.render_error(&message))?;
                Ok(false)
            }
            None => Err(error),
        },
    }
}

fn calculate<R: BufRead, W: Write>(
    cli: &Cli,
    input: R,
    output: &mut W,
    color_enabled: bool,
) -> Result<()> {
    let loader = ConfigLoader::load(&cli.config)?;
    let calculator = TaxCalculator::new(loader.tax().clone());
    let writer = ReportWriter::new(CurrencyFormatter::new(loader.format()), color_enabled);

    let mut provider = InputProvider::new(input, &mut *output, color_enabled);
    let salary = provider.salary(cli.salary.as_deref())?;
    let frequency = provider.frequency(cli.frequency.as_deref())?;

    writeln!(output, "\nCalculating salary details...\n")?;
    let breakdown = calculator.calculate(salary, frequency)?;
    write!(output, "{}", writer.render(&breakdown))?;

    if cli.audit {
        writeln!(output, "\n{}", writer.render_audit(&breakdown)?)?;
    }

    Ok(())
}
