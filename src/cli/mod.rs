pub mod parse;
pub mod rules;

use clap::{Parser, Subcommand};

use crate::dates::YearPolicy;
use crate::matcher::MatcherMode;

#[derive(Parser)]
#[command(
    name = "billfold",
    about = "Parse password-protected credit-card statement PDFs into categorized CSV ledgers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a statement PDF into a categorized CSV ledger.
    Parse {
        /// Path to a statement PDF (ignored when --year/--month are given)
        #[arg(default_value = "statement.pdf")]
        file: String,
        /// Statement year to look up in the statements directory
        #[arg(long)]
        year: Option<i32>,
        /// Statement month to look up in the statements directory
        #[arg(long)]
        month: Option<u32>,
        /// Transaction line matcher variant
        #[arg(long, value_enum, default_value_t)]
        matcher: MatcherMode,
        /// Year resolution policy for MM/DD dates
        #[arg(long = "year-policy", value_enum, default_value_t)]
        year_policy: YearPolicy,
        /// Output CSV path (default: statement_parsed[_YYYY-MM].csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Manage category rules.
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// List the effective category rules, highest priority first.
    List,
}
