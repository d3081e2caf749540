//! Salary display strings and the integer keys used to rank them.
//!
//! The search API reports salaries either as nothing, as a single `value`, or as a
//! `from`/`to` range. Records keep only the display string; the numeric key is derived
//! on demand whenever vacancies are ranked.

use serde_json::Value;

/// Display string for a vacancy without salary information.
pub const SALARY_NOT_SPECIFIED: &str = "salary not specified";

/// Sentinel written by earlier releases; still recognized in stored files.
pub const LEGACY_SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";

/// Thousands separator embedded by the API in formatted amounts.
const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

pub fn is_sentinel(display: &str) -> bool {
    display == SALARY_NOT_SPECIFIED || display == LEGACY_SALARY_NOT_SPECIFIED
}

/// Builds the display string from the raw `salary` field of a listing.
///
/// Priority: absent or null, then a single `value`, then a complete `from`/`to`
/// range. Anything else is treated as unspecified. Currency and period are ignored.
pub fn display_from_raw(raw: Option<&Value>) -> String {
    let Some(Value::Object(fields)) = raw else {
        return SALARY_NOT_SPECIFIED.to_string();
    };

    if let Some(value) = fields.get("value") {
        return stringify(value).unwrap_or_else(|| SALARY_NOT_SPECIFIED.to_string());
    }

    match (
        fields.get("from").and_then(stringify),
        fields.get("to").and_then(stringify),
    ) {
        (Some(from), Some(to)) => format!("from {} to {}", from, to),
        _ => SALARY_NOT_SPECIFIED.to_string(),
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Strips U+202F separators; empty input becomes the sentinel. Idempotent.
pub fn sanitize(display: &str) -> String {
    if display.is_empty() {
        return SALARY_NOT_SPECIFIED.to_string();
    }
    display.replace(NARROW_NO_BREAK_SPACE, "")
}

/// Integer used for ranking. Unparsable strings (sentinels, ranges) rank as zero.
pub fn comparable_key(display: &str) -> i64 {
    let compact: String = display.chars().filter(|c| *c != ' ').collect();
    compact.trim().parse::<i64>().unwrap_or(0)
}
