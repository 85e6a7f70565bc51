/// One table row as produced by text extraction. `None` marks a cell the
/// extractor rendered as blank (merged or empty table cell).
#[derive(Debug, Clone)]
pub struct RawRow(pub Vec<Option<String>>);

/// A transaction reconstructed from one or more table rows, before date
/// resolution and categorization. The amount is always numeric; rows whose
/// amount fails to parse never become candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Transaction date, `MM/DD`.
    pub txn_date: String,
    /// Posting date, `MM/DD`.
    pub post_date: String,
    pub description: String,
    pub amount: f64,
}

/// Reference year and month the statement was issued under, derived once
/// from the document text.
#[derive(Debug, Clone, Copy)]
pub struct StatementContext {
    pub year: i32,
    pub month: Option<u32>,
}

/// A fully resolved ledger row. Amounts are whole New Taiwan dollars,
/// truncated from the statement figure.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub category: String,
    pub amount: i64,
    /// Cleaned merchant description.
    pub note1: String,
    /// Posting date as printed on the statement.
    pub note2: String,
}
