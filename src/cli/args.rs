//! Command line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Net pay calculator for a yearly salary package.
///
/// Reads the salary package and pay frequency (prompting for any that are
/// not given as flags), then prints the contribution, deductions, net income
/// and pay packet.
#[derive(Debug, Clone, Parser)]
#[command(name = "salary-calculator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file with the tax brackets and display format
    #[arg(
        short,
        long,
        env = "SALARY_CALCULATOR_CONFIG",
        default_value = "config/salary.yaml"
    )]
    pub config: PathBuf,

    /// Yearly salary package, prompted for when omitted
    #[arg(short, long)]
    pub salary: Option<String>,

    /// Pay frequency (W, F or M), prompted for when omitted
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// Print the calculation audit trace as JSON
    #[arg(long)]
    pub audit: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
