//! Loose probing of untrusted JSON values.
//!
//! Raw quiz payloads come from model output or hand-written forms, so field
//! names vary and scalar types are unreliable. These helpers read a logical
//! field through an ordered alias list and render any JSON value as text the
//! way a JavaScript `String(...)` call would, which is the format upstream
//! producers assume.

use serde_json::{Map, Number, Value};

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy;
/// every array and object (even empty) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First alias holding a truthy value.
///
/// Falsy-but-present values fall through to the next alias, so an explicit
/// `"title": ""` still lets `"titre"` win.
pub fn first_truthy<'a>(map: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_truthy(value))
}

/// First alias holding a non-null value. `0` and `""` are kept.
pub fn first_present<'a>(map: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// Render a value as text. `null` renders as the empty string.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Stringify and trim; a missing value yields an empty string.
pub fn clean_text(value: Option<&Value>) -> String {
    value.map(|v| js_trim(&stringify(v)).to_string()).unwrap_or_default()
}

/// Like [`clean_text`], with carriage returns stripped first.
pub fn clean_title(value: Option<&Value>) -> String {
    value
        .map(|v| js_trim(&stringify(v).replace('\r', "")).to_string())
        .unwrap_or_default()
}

/// Parse a trimmed string as a finite number (`"2"`, `"2.0"`, `"1e0"`).
pub fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Trim the characters JavaScript's `String.prototype.trim` strips:
/// Unicode white space plus the byte-order mark.
pub fn js_trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => format_exponent(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` -> `1.5e-7`.
fn format_exponent(f: f64) -> String {
    let text = format!("{f:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(-1), json!(" "), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_first_truthy_skips_falsy_values() {
        let map = object(json!({ "title": "", "titre": "Capitales", "name": "ignored" }));
        assert_eq!(
            first_truthy(&map, &["title", "titre", "name"]),
            Some(&json!("Capitales"))
        );

        let map = object(json!({ "title": 0, "name": null }));
        assert_eq!(first_truthy(&map, &["title", "titre", "name"]), None);
    }

    #[test]
    fn test_first_present_keeps_zero() {
        let map = object(json!({ "correctAnswer": 0, "answer": 2 }));
        assert_eq!(
            first_present(&map, &["correctAnswer", "answer"]),
            Some(&json!(0))
        );

        let map = object(json!({ "correctAnswer": null, "answer": "B" }));
        assert_eq!(
            first_present(&map, &["correctAnswer", "answer"]),
            Some(&json!("B"))
        );
    }

    #[test]
    fn test_stringify_matches_js_rendering() {
        assert_eq!(stringify(&json!(42)), "42");
        assert_eq!(stringify(&json!(2.0)), "2");
        assert_eq!(stringify(&json!(2.5)), "2.5");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!([1, "a", null])), "1,a,");
        assert_eq!(stringify(&json!({ "k": 1 })), "[object Object]");
        assert_eq!(stringify(&json!(null)), "");
    }

    #[test]
    fn test_stringify_uses_exponent_outside_js_range() {
        assert_eq!(stringify(&json!(1e21)), "1e+21");
        assert_eq!(stringify(&json!(1.5e300)), "1.5e+300");
        assert_eq!(stringify(&json!(1e-7)), "1e-7");
        assert_eq!(stringify(&json!(-2.5e-8)), "-2.5e-8");
        assert_eq!(stringify(&json!(1e20)), "100000000000000000000");
        assert_eq!(stringify(&json!(0.000001)), "0.000001");
    }

    #[test]
    fn test_stringify_negative_zero() {
        assert_eq!(stringify(&json!(-0.0)), "0");
    }

    #[test]
    fn test_trim_strips_byte_order_mark() {
        assert_eq!(js_trim("\u{FEFF} Paris \u{FEFF}"), "Paris");
        assert_eq!(clean_text(Some(&json!("\u{FEFF}"))), "");
        assert_eq!(clean_title(Some(&json!("\u{FEFF}Quiz\r"))), "Quiz");
    }

    #[test]
    fn test_clean_title_strips_carriage_returns() {
        assert_eq!(clean_title(Some(&json!("  Quiz\r\n du jour\r "))), "Quiz\n du jour");
        assert_eq!(clean_title(None), "");
        assert_eq!(clean_text(Some(&json!("  Paris \t"))), "Paris");
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("2"), Some(2.0));
        assert_eq!(parse_finite("1e0"), Some(1.0));
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("Paris"), None);
    }
}
