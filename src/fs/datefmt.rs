//! Date pattern formatting for `{date}` and `{task_date}`.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use regex::{Captures, Regex};

/// Recognized pattern fields, longest alternatives first.
static PATTERN_FIELDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"YYYY|YY|MMMM|MMM|MM|DD|hh|mm|ss").expect("valid date regex"));

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format `date` according to `pattern`.
///
/// Supported fields: `YYYY`, `YY`, `MMMM` (full month name), `MMM` (short
/// month name), `MM`, `DD`, `hh`, `mm`, `ss`. Everything else is copied
/// literally. The date is rendered in its own offset.
pub fn format_date(date: &DateTime<FixedOffset>, pattern: &str) -> String {
    let month_name = MONTHS[date.month0() as usize];

    PATTERN_FIELDS
        .replace_all(pattern, |caps: &Captures| match &caps[0] {
            "YYYY" => format!("{:04}", date.year()),
            "YY" => format!("{:02}", date.year().rem_euclid(100)),
            "MMMM" => month_name.to_string(),
            "MMM" => month_name[..3].to_string(),
            "MM" => format!("{:02}", date.month()),
            "DD" => format!("{:02}", date.day()),
            "hh" => format!("{:02}", date.hour()),
            "mm" => format!("{:02}", date.minute()),
            "ss" => format!("{:02}", date.second()),
            other => other.to_string(),
        })
        .into_owned()
}
