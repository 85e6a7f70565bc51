use chrono::Datelike;

use crate::categorize::{self, CategoryRule};
use crate::dates::{self, YearPolicy};
use crate::matcher::{self, ContinuationBuffer, MatcherMode};
use crate::models::{Candidate, RawRow, StatementContext, TransactionRecord};
use crate::normalize;

/// Single pass over the extracted rows in document order. Non-matching
/// rows accumulate as pending description text; a matching row drains the
/// buffer as its description prefix. The buffer is empty again after every
/// match attempt, so no continuation text crosses a transaction boundary.
pub fn extract_candidates(rows: &[RawRow], mode: MatcherMode) -> Vec<Candidate> {
    let mut buffer = ContinuationBuffer::new();
    let mut candidates = Vec::new();

    for row in rows {
        let Some(line) = normalize::row_text(row) else {
            // Blank rows break continuation runs.
            buffer.discard();
            continue;
        };

        let Some(m) = matcher::match_line(mode, &line) else {
            if matcher::contains_date_token(&line) {
                // A stray date fragment means the buffered text belongs to
                // noise, not to the next transaction.
                buffer.discard();
            } else {
                buffer.push(&line);
            }
            continue;
        };

        let prefix = buffer.take();
        let description = if prefix.is_empty() {
            m.rest.clone()
        } else if m.rest.is_empty() {
            prefix
        } else {
            format!("{prefix} {}", m.rest)
        };

        // Repeated per-page table headers match the transaction shape.
        if matcher::contains_header_keyword(&description) {
            continue;
        }

        let resolved = match mode {
            MatcherMode::Strict => m.amount.map(|a| (description, a)),
            MatcherMode::Loose => crate::amount::resolve(&description),
        };
        if let Some((description, amount)) = resolved {
            candidates.push(Candidate {
                txn_date: m.txn_date,
                post_date: m.post_date,
                description,
                amount,
            });
        }
    }
    candidates
}

/// Resolve candidates into ledger records: calendar date, category, and a
/// whole-dollar amount. Candidates with an invalid date drop silently.
pub fn resolve_records(
    candidates: Vec<Candidate>,
    ctx: &StatementContext,
    policy: YearPolicy,
    rules: &[CategoryRule],
) -> Vec<TransactionRecord> {
    candidates
        .into_iter()
        .filter_map(|c| {
            let date = dates::resolve(&c.txn_date, ctx, policy)?;
            Some(TransactionRecord {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                category: categorize::classify(&c.description, rules),
                amount: c.amount as i64,
                note1: c.description,
                note2: c.post_date,
            })
        })
        .collect()
}
