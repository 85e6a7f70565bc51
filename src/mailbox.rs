use std::path::{Path, PathBuf};

use crate::error::{BillfoldError, Result};

/// File name the statement downloader gives an e-bill attachment.
fn downloaded_name(year: i32, month: u32) -> String {
    format!("sinopac_statement_{year}-{month:02}.pdf")
}

/// Find the downloaded statement PDF for `(year, month)` in `dir`.
///
/// Prefers the downloader's own file name, then falls back to any PDF
/// statement attachment carrying the `YYYY-MM` tag. Payment-slip
/// attachments (繳款聯) ride along in the same mails and are never the
/// statement itself, so they are skipped.
pub fn locate_statement(dir: &Path, year: i32, month: u32) -> Result<PathBuf> {
    let exact = dir.join(downloaded_name(year, month));
    if exact.is_file() {
        return Ok(exact);
    }

    let tag = format!("{year}-{month:02}");
    let not_found = || BillfoldError::StatementNotFound {
        year,
        month,
        dir: dir.display().to_string(),
    };

    let entries = std::fs::read_dir(dir).map_err(|_| not_found())?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            name.to_lowercase().ends_with(".pdf")
                && name.contains(&tag)
                && (name.contains("帳單") || name.to_lowercase().contains("statement"))
                && !name.contains("繳款聯")
        })
        .collect();
    matches.sort();
    matches.into_iter().next().ok_or_else(not_found)
}
