use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::models::StatementContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum YearPolicy {
    /// A statement issued in January/February lists late-December
    /// transactions from the prior calendar year; shift those back.
    #[default]
    Rollover,
    /// Use the reference year unconditionally.
    Fixed,
}

fn mmdd_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("mm/dd pattern"))
}

// Statements date themselves in the ROC calendar: 中華民國 114 年 08 月.
fn banner_ym_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"中華民國\s*(\d{3})\s*年\s*(\d{2})\s*月").expect("banner year-month pattern")
    })
}

fn banner_y_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"中華民國\s*(\d{3})\s*年").expect("banner year pattern"))
}

const ROC_EPOCH: i32 = 1911;

/// Resolve an `MM/DD` token into a calendar date. Returns `None` for
/// tokens of the wrong shape or dates that do not exist.
pub fn resolve(token: &str, ctx: &StatementContext, policy: YearPolicy) -> Option<NaiveDate> {
    let caps = mmdd_re().captures(token.trim())?;
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;

    let year = match (policy, ctx.month) {
        (YearPolicy::Rollover, Some(ref_month)) if ref_month <= 2 && month >= 11 => ctx.year - 1,
        _ => ctx.year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Derive the statement's reference year and month from page text. Falls
/// back to the current local date when no ROC banner is present.
pub fn statement_context(pages: &[String]) -> StatementContext {
    for page in pages {
        if let Some(caps) = banner_ym_re().captures(page) {
            if let (Ok(roc), Ok(month)) = (caps[1].parse::<i32>(), caps[2].parse::<u32>()) {
                return StatementContext {
                    year: roc + ROC_EPOCH,
                    month: Some(month),
                };
            }
        }
    }
    for page in pages {
        if let Some(caps) = banner_y_re().captures(page) {
            if let Ok(roc) = caps[1].parse::<i32>() {
                return StatementContext {
                    year: roc + ROC_EPOCH,
                    month: None,
                };
            }
        }
    }
    let now = chrono::Local::now();
    StatementContext {
        year: now.year(),
        month: Some(now.month()),
    }
}
