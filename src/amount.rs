use std::sync::OnceLock;

use regex::Regex;

fn trailing_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(-?[\d,]+(?:\.\d+)?)[^\d,.\-]*$").expect("trailing amount pattern")
    })
}

fn foreign_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(USD|US|JPY|EUR)\s+([\d,.\-]+)").expect("foreign amount pattern"))
}

fn foreign_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*(USD|US|JPY|EUR)\s+[\d,.\-]+").expect("foreign strip pattern"))
}

fn ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

/// Parse a statement amount. Thousands separators are stripped first.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().replace(',', "").parse::<f64>().ok()
}

/// Loose-mode amount resolution over a merged description.
///
/// Takes the trailing numeric token as the provisional amount and strips it.
/// If the remaining text carries an original-currency figure (`USD 12.34`
/// printed beside the converted local total), that figure wins and every
/// such `code + number` substring is removed. Returns the cleaned
/// description and the final amount, or `None` when no amount can be
/// established (no trailing token, or nothing parses).
pub fn resolve(description: &str) -> Option<(String, f64)> {
    let caps = trailing_amount_re().captures(description)?;
    let mut amount = parse_amount(caps.get(1)?.as_str());

    let mut desc = trailing_amount_re()
        .replace(description, "")
        .trim()
        .to_string();

    if let Some(fcaps) = foreign_re().captures(&desc) {
        if let Some(m) = fcaps.get(2) {
            if let Some(foreign) = parse_amount(m.as_str()) {
                amount = Some(foreign);
                desc = foreign_strip_re().replace_all(&desc, "").trim().to_string();
            }
        }
    }

    let desc = ws_re().replace_all(&desc, " ").trim().to_string();
    amount.map(|a| (desc, a))
}
