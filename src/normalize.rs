use crate::models::RawRow;

/// Join all non-absent cells of a row into a single line, left to right,
/// separated by single spaces. Returns `None` for a row with no content —
/// the signal that breaks a continuation run.
pub fn row_text(row: &RawRow) -> Option<String> {
    let joined = row
        .0
        .iter()
        .filter_map(|cell| cell.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let joined = joined.trim().to_string();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
