use std::sync::OnceLock;

use regex::Regex;

/// Column-header phrases repeated on every statement page. A merged
/// description containing any of these is boilerplate, not a transaction.
pub const HEADER_KEYWORDS: &[&str] = &["帳單說明", "臺幣金額", "總費用", "消費日", "卡號"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatcherMode {
    /// Capture the two dates and free text; resolve the amount from the
    /// tail of that text in a separate pass.
    #[default]
    Loose,
    /// Capture description and trailing amount in one pass; lines without
    /// a trailing amount do not match at all.
    Strict,
}

fn loose_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}/\d{2})\s+(\d{2}/\d{2})\s+(?:\d{4}(?:\.0)?\s+)?(.*)$")
            .expect("loose transaction pattern")
    })
}

fn strict_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{2}/\d{2})\s+(\d{2}/\d{2})\s+(?:\d{4}(?:\.0)?\s+)?(.*?)\s*(-?[\d,]+(?:\.\d+)?)$")
            .expect("strict transaction pattern")
    })
}

fn date_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{2}/\d{2}").expect("date token pattern"))
}

/// The date/card columns of a transaction line, plus the free text after
/// them. The optional 4-digit group absorbs the card-suffix column, which
/// table extraction renders as e.g. `5566` or `5566.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    pub txn_date: String,
    pub post_date: String,
    /// Free text after the fixed columns. Loose mode leaves any trailing
    /// amount in here for the amount resolver; strict mode has removed it.
    pub rest: String,
    /// Strict mode only: the captured trailing amount, if it parsed.
    pub amount: Option<f64>,
}

pub fn match_line(mode: MatcherMode, line: &str) -> Option<LineMatch> {
    match mode {
        MatcherMode::Loose => {
            let caps = loose_re().captures(line)?;
            Some(LineMatch {
                txn_date: caps[1].to_string(),
                post_date: caps[2].to_string(),
                rest: caps[3].trim().to_string(),
                amount: None,
            })
        }
        MatcherMode::Strict => {
            let caps = strict_re().captures(line)?;
            Some(LineMatch {
                txn_date: caps[1].to_string(),
                post_date: caps[2].to_string(),
                rest: caps[3].trim().to_string(),
                amount: crate::amount::parse_amount(&caps[4]),
            })
        }
    }
}

pub fn contains_header_keyword(description: &str) -> bool {
    HEADER_KEYWORDS.iter().any(|kw| description.contains(kw))
}

pub fn contains_date_token(line: &str) -> bool {
    date_token_re().is_match(line)
}

// ---------------------------------------------------------------------------
// Continuation buffer
// ---------------------------------------------------------------------------

/// Pending description fragments from rows that precede the row carrying
/// the numeric columns. Two states: EMPTY (no fragments) and ACCUMULATING.
/// Blank rows and stray date fragments discard the buffer; a match attempt
/// always drains it.
#[derive(Debug, Default)]
pub struct ContinuationBuffer {
    fragments: Vec<String>,
}

impl ContinuationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn push(&mut self, line: &str) {
        self.fragments.push(line.to_string());
    }

    pub fn discard(&mut self) {
        self.fragments.clear();
    }

    /// Drain the buffered fragments as a single description prefix.
    pub fn take(&mut self) -> String {
        let joined = self.fragments.join(" ").trim().to_string();
        self.fragments.clear();
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_match_with_card_suffix() {
        let m = match_line(MatcherMode::Loose, "01/05 01/06 5566 STARBUCKS 150").unwrap();
        assert_eq!(m.txn_date, "01/05");
        assert_eq!(m.post_date, "01/06");
        assert_eq!(m.rest, "STARBUCKS 150");
        assert_eq!(m.amount, None);
    }

    #[test]
    fn test_loose_match_card_suffix_rendered_as_float() {
        let m = match_line(MatcherMode::Loose, "01/05 01/06 5566.0 STARBUCKS 150").unwrap();
        assert_eq!(m.rest, "STARBUCKS 150");
    }

    #[test]
    fn test_loose_match_without_card_suffix() {
        let m = match_line(MatcherMode::Loose, "01/10 01/11 UBER 200").unwrap();
        assert_eq!(m.txn_date, "01/10");
        assert_eq!(m.rest, "UBER 200");
    }

    #[test]
    fn test_loose_match_without_trailing_amount() {
        // Wrapped rows can end mid-description; loose mode still matches.
        let m = match_line(MatcherMode::Loose, "03/02 03/03 中華電信").unwrap();
        assert_eq!(m.rest, "中華電信");
    }

    #[test]
    fn test_strict_match_splits_amount() {
        let m = match_line(MatcherMode::Strict, "01/05 01/06 5566 STARBUCKS 1,500").unwrap();
        assert_eq!(m.rest, "STARBUCKS");
        assert_eq!(m.amount, Some(1500.0));
    }

    #[test]
    fn test_strict_requires_trailing_amount() {
        assert_eq!(match_line(MatcherMode::Strict, "03/02 03/03 中華電信"), None);
    }

    #[test]
    fn test_strict_negative_amount() {
        let m = match_line(MatcherMode::Strict, "02/01 02/02 REFUND -3,000").unwrap();
        assert_eq!(m.amount, Some(-3000.0));
    }

    #[test]
    fn test_single_date_does_not_match() {
        assert_eq!(match_line(MatcherMode::Loose, "01/05 STARBUCKS 150"), None);
        assert_eq!(match_line(MatcherMode::Loose, "page 3 of 4"), None);
    }

    #[test]
    fn test_header_keyword_guard() {
        assert!(contains_header_keyword("消費日 帳單說明 臺幣金額"));
        assert!(contains_header_keyword("卡號 5566"));
        assert!(!contains_header_keyword("STARBUCKS 信義店"));
    }

    #[test]
    fn test_date_token_detection() {
        assert!(contains_date_token("繳款期限 08/15"));
        assert!(!contains_date_token("STARBUCKS 信義店"));
    }

    #[test]
    fn test_buffer_take_joins_and_clears() {
        let mut buf = ContinuationBuffer::new();
        buf.push("GOOGLE *CLOUD");
        buf.push("SINGAPORE");
        assert!(!buf.is_empty());
        assert_eq!(buf.take(), "GOOGLE *CLOUD SINGAPORE");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_buffer_discard() {
        let mut buf = ContinuationBuffer::new();
        buf.push("junk");
        buf.discard();
        assert!(buf.is_empty());
        assert_eq!(buf.take(), "");
    }
}
