use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BillfoldError, Result};
use crate::models::RawRow;

// Runs of two or more spaces (or a tab) separate table cells in
// layout-preserving text extraction.
fn cell_gap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\t| {2,}").expect("cell gap pattern"))
}

/// A decrypted statement document: per-page text, plus the table rows
/// derived from it. The parsing pipeline never touches the PDF itself.
pub struct StatementDocument {
    pages: Vec<String>,
}

impl StatementDocument {
    /// Open and decrypt a statement PDF, extracting per-page text. A wrong
    /// password or an undecryptable document is fatal; so is a document
    /// with no text at all (scanned or image-only statements).
    pub fn open(path: &Path, password: &str) -> Result<Self> {
        let extracted = if password.is_empty() {
            pdf_extract::extract_text_by_pages(path)
        } else {
            match pdf_extract::extract_text_by_pages_encrypted(path, password) {
                // Password offered for a document that never needed one.
                Err(e) if e.to_string().to_lowercase().contains("not encrypted") => {
                    pdf_extract::extract_text_by_pages(path)
                }
                other => other,
            }
        };

        let pages = extracted.map_err(|e| {
            let msg = e.to_string();
            let lower = msg.to_lowercase();
            if lower.contains("decrypt") || lower.contains("password") {
                BillfoldError::Password
            } else {
                BillfoldError::Pdf(msg)
            }
        })?;

        if pages.iter().all(|p| p.trim().is_empty()) {
            return Err(BillfoldError::NoTableText);
        }
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// All table rows in document order.
    pub fn rows(&self) -> Vec<RawRow> {
        self.pages.iter().flat_map(|p| page_rows(p)).collect()
    }
}

/// Split one page of layout text into rows of cells. Blank cells become
/// absent markers, and blank lines become rows with no content — the
/// normalizer turns those into the continuation-breaking "empty" signal.
fn page_rows(page: &str) -> Vec<RawRow> {
    page.lines()
        .map(|line| {
            let cells = cell_gap_re()
                .split(line)
                .map(|c| {
                    let c = c.trim();
                    if c.is_empty() {
                        None
                    } else {
                        Some(c.to_string())
                    }
                })
                .collect();
            RawRow(cells)
        })
        .collect()
}
