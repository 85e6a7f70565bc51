use std::io::Write;
use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt;
use crate::models::TransactionRecord;

/// Label on the synthetic total row.
pub const TOTAL_LABEL: &str = "本月總計";

const HEADERS: [&str; 7] = ["年度", "月份", "日期", "項目", "金額", "附註1", "附註2"];

/// The final, ordered statement ledger plus its monthly total.
#[derive(Debug)]
pub struct Ledger {
    pub records: Vec<TransactionRecord>,
    pub total: i64,
}

/// Order records by (month, day) — stable, so same-day rows keep their
/// statement order — and compute the monthly total.
pub fn assemble(mut records: Vec<TransactionRecord>) -> Ledger {
    records.sort_by_key(|r| (r.month, r.day));
    let total = records.iter().map(|r| r.amount).sum();
    Ledger { records, total }
}

/// Console preview of the ledger, total row included.
pub fn preview_table(ledger: &Ledger) -> Table {
    let mut table = Table::new();
    table.set_header(HEADERS.to_vec());
    for r in &ledger.records {
        table.add_row(vec![
            Cell::new(r.year),
            Cell::new(r.month),
            Cell::new(r.day),
            Cell::new(&r.category),
            Cell::new(fmt::amount(r.amount)),
            Cell::new(&r.note1),
            Cell::new(&r.note2),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(TOTAL_LABEL),
        Cell::new(fmt::amount(ledger.total)),
        Cell::new(""),
        Cell::new(""),
    ]);
    table
}

/// Write the ledger as UTF-8 CSV with a byte-order mark, so spreadsheet
/// apps pick up the encoding for the Chinese columns.
pub fn write_csv(ledger: &Ledger, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(b"\xEF\xBB\xBF")?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(HEADERS)?;
    for r in &ledger.records {
        wtr.write_record([
            r.year.to_string(),
            r.month.to_string(),
            r.day.to_string(),
            r.category.clone(),
            r.amount.to_string(),
            r.note1.clone(),
            r.note2.clone(),
        ])?;
    }
    wtr.write_record([
        String::new(),
        String::new(),
        String::new(),
        TOTAL_LABEL.to_string(),
        ledger.total.to_string(),
        String::new(),
        String::new(),
    ])?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32, day: u32, note1: &str, amount: i64) -> TransactionRecord {
        TransactionRecord {
            year: 2025,
            month,
            day,
            category: "永豐信用卡卡費".to_string(),
            amount,
            note1: note1.to_string(),
            note2: "01/06".to_string(),
        }
    }

    #[test]
    fn test_assemble_sorts_by_month_then_day() {
        let ledger = assemble(vec![
            record(2, 1, "b", 10),
            record(1, 20, "a", 20),
            record(1, 5, "c", 30),
        ]);
        let order: Vec<&str> = ledger.records.iter().map(|r| r.note1.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_assemble_sort_is_stable_for_same_day() {
        let ledger = assemble(vec![
            record(1, 5, "first", 10),
            record(1, 5, "second", 20),
            record(1, 5, "third", 30),
        ]);
        let order: Vec<&str> = ledger.records.iter().map(|r| r.note1.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_total_sums_all_amounts() {
        let ledger = assemble(vec![record(1, 5, "a", 150), record(1, 10, "b", 200)]);
        assert_eq!(ledger.total, 350);
    }

    #[test]
    fn test_total_includes_refunds() {
        let ledger = assemble(vec![record(1, 5, "a", 150), record(1, 6, "refund", -50)]);
        assert_eq!(ledger.total, 100);
    }

    #[test]
    fn test_preview_table_has_total_row() {
        let ledger = assemble(vec![record(1, 5, "a", 150)]);
        let table = preview_table(&ledger);
        let rendered = table.to_string();
        assert!(rendered.contains(TOTAL_LABEL));
        assert!(rendered.contains("150"));
    }

    #[test]
    fn test_full_pipeline_scenario() {
        use crate::categorize;
        use crate::dates::YearPolicy;
        use crate::matcher::MatcherMode;
        use crate::models::{RawRow, StatementContext};
        use crate::{pipeline, settlement};

        let rows: Vec<RawRow> = ["01/10 01/11 UBER 200", "01/05 01/06 1234 STARBUCKS 150"]
            .iter()
            .map(|l| RawRow(vec![Some(l.to_string())]))
            .collect();
        let ctx = StatementContext {
            year: 2025,
            month: Some(8),
        };

        let mut candidates = pipeline::extract_candidates(&rows, MatcherMode::Loose);
        settlement::isolate(&mut candidates);
        let records = pipeline::resolve_records(
            candidates,
            &ctx,
            YearPolicy::Fixed,
            &categorize::builtin_rules(),
        );
        let ledger = assemble(records);

        assert_eq!(ledger.records.len(), 2);
        // Sorted by (month, day) even though UBER came first in the document.
        assert_eq!(ledger.records[0].note1, "STARBUCKS");
        assert_eq!(ledger.records[0].category, "永豐信用卡卡費");
        assert_eq!(ledger.records[1].note1, "UBER");
        assert_eq!(ledger.records[1].category, "交通");
        assert_eq!(ledger.total, 350);
    }

    #[test]
    fn test_csv_has_bom_header_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let ledger = assemble(vec![record(1, 5, "STARBUCKS", 150), record(1, 10, "UBER", 200)]);
        write_csv(&ledger, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

        let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "年度,月份,日期,項目,金額,附註1,附註2");
        assert!(lines[1].starts_with("2025,1,5,"));
        assert_eq!(lines[3], format!(",,,{TOTAL_LABEL},350,,"));
    }
}
