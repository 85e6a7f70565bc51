use std::path::{Path, PathBuf};

use colored::Colorize;
use zeroize::Zeroize;

use crate::categorize;
use crate::dates::{self, YearPolicy};
use crate::error::{BillfoldError, Result};
use crate::mailbox;
use crate::matcher::MatcherMode;
use crate::pdf::StatementDocument;
use crate::pipeline;
use crate::report;
use crate::settings::load_settings;
use crate::settlement;

pub fn run(
    file: &str,
    year: Option<i32>,
    month: Option<u32>,
    matcher: MatcherMode,
    year_policy: YearPolicy,
    output: Option<String>,
) -> Result<()> {
    let settings = load_settings();

    let (pdf_path, default_output) = match (year, month) {
        (Some(y), Some(m)) => {
            let dir = PathBuf::from(&settings.statements_dir);
            println!("Looking for the {y}-{m:02} statement in {}", dir.display());
            let path = mailbox::locate_statement(&dir, y, m)?;
            println!("Found statement: {}", path.display());
            (path, format!("statement_parsed_{y}-{m:02}.csv"))
        }
        (None, None) => {
            let path = PathBuf::from(file);
            if !path.is_file() {
                return Err(BillfoldError::Other(format!(
                    "{} does not exist (pass a statement PDF, or --year/--month to look one up)",
                    path.display()
                )));
            }
            (path, "statement_parsed.csv".to_string())
        }
        _ => {
            return Err(BillfoldError::Other(
                "--year and --month must be given together".to_string(),
            ))
        }
    };

    let file_name = pdf_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("statement.pdf");
    let mut password = rpassword::prompt_password(format!("Password for {file_name}: "))?;
    let opened = StatementDocument::open(&pdf_path, &password);
    password.zeroize();
    let doc = opened?;

    let ctx = dates::statement_context(doc.pages());
    match ctx.month {
        Some(m) => println!("Statement period detected: {}-{m:02}", ctx.year),
        None => println!("Statement year detected: {}", ctx.year),
    }

    let mut candidates = pipeline::extract_candidates(&doc.rows(), matcher);
    if candidates.is_empty() {
        return Err(BillfoldError::NoTransactions);
    }
    println!("Matched {} candidate transactions", candidates.len());

    settlement::isolate(&mut candidates);

    let rules = categorize::effective_rules(&settings.rules);
    let records = pipeline::resolve_records(candidates, &ctx, year_policy, &rules);
    if records.is_empty() {
        return Err(BillfoldError::NoTransactions);
    }

    let ledger = report::assemble(records);
    println!("{}", report::preview_table(&ledger));

    let out = output.unwrap_or(default_output);
    report::write_csv(&ledger, Path::new(&out))?;
    println!("Wrote {}", out.green());
    Ok(())
}
