//! German display formatting for table cells and selection labels.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};

/// Shown for missing values.
pub const DASH: &str = "–";

/// `2024-03-05` (or `2024-03-05T09:30`) as `05.03.2024`. Unparseable input
/// is shown verbatim, missing input as a dash.
pub fn date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return DASH.to_string();
    };
    parse_date(raw)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
                .map(|dt| dt.date())
                .ok()
        })
}

pub fn euro(amount: f64) -> String {
    format!("{amount:.2} €")
}

/// Revenue card: whole euros.
pub fn euro_rounded(amount: f64) -> String {
    format!("{amount:.0} €")
}

pub fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DASH.to_string(),
    }
}

/// Plain text of a stored value; `null` and missing read as empty.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => number_text(n),
        Some(other) => other.to_string(),
    }
}

/// `12`, `299`, `299.5`: no trailing `.0` on whole numbers.
pub fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(date(Some("2024-03-05")), "05.03.2024");
        assert_eq!(date(Some("2024-03-05T09:30")), "05.03.2024");
        assert_eq!(date(Some("next week")), "next week");
        assert_eq!(date(Some("")), DASH);
        assert_eq!(date(None), DASH);
    }

    #[test]
    fn money() {
        assert_eq!(euro(299.0), "299.00 €");
        assert_eq!(euro_rounded(250.0), "250 €");
        assert_eq!(euro_rounded(249.6), "250 €");
    }

    #[test]
    fn numbers_lose_trailing_zero() {
        assert_eq!(value_text(Some(&serde_json::json!(299.0))), "299");
        assert_eq!(value_text(Some(&serde_json::json!(299.5))), "299.5");
        assert_eq!(value_text(Some(&serde_json::json!(12))), "12");
        assert_eq!(value_text(Some(&Value::Null)), "");
    }

    #[test]
    fn text_falls_back_to_dash() {
        assert_eq!(text(Some("  ")), DASH);
        assert_eq!(text(Some("Bau A")), "Bau A");
        assert_eq!(text(None), DASH);
    }
}
