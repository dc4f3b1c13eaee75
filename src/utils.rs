// Utility functions
use chrono::{Datelike, NaiveDate};

/// Parses a report date in the dataset's `MM/DD/YYYY` format.
/// ISO `YYYY-MM-DD` is accepted as well.
pub fn parse_report_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed.get(..10).unwrap_or(trimmed), "%Y-%m-%d"))
        .ok()
}

/// Turns a section name into its directory name: every char outside
/// `[A-Za-z0-9-]` becomes `-`, then runs of `-` collapse into one.
pub fn sanitize_path(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Same month/day one year earlier. Feb 29 lands on Feb 28.
pub fn one_year_earlier(date: NaiveDate) -> NaiveDate {
    let year = date.year() - 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}
