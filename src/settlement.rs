use crate::models::Candidate;

/// The statement's own wording on the autopay line once the previous
/// balance has been collected.
pub const SETTLEMENT_MARKER: &str = "永豐自扣已入帳,謝謝!";

/// Post-pass over the full candidate set: the most negative amount is the
/// bank's autopay settlement of the previous statement, not spending.
/// Relabel it with the settlement marker, then drop every marker row.
/// Genuine refunds (other negative amounts) and zero amounts survive.
/// Rows tied at the minimum all carry the marker and all drop.
pub fn isolate(candidates: &mut Vec<Candidate>) {
    let min = candidates
        .iter()
        .map(|c| c.amount)
        .fold(f64::INFINITY, f64::min);
    if min < 0.0 {
        for c in candidates.iter_mut() {
            if c.amount == min {
                c.description = SETTLEMENT_MARKER.to_string();
            }
        }
    }
    candidates.retain(|c| c.description != SETTLEMENT_MARKER);
}
