//! Settings-string coercion.
//!
//! Turns `KEY=VALUE[,KEY=VALUE...]` into typed crawl-engine overrides.
//!
//! # Design Decisions
//! - A value containing a comma cannot be expressed; there is no escaping
//! - Entries without `=` are dropped with a warning, never fatal
//! - Inference order: boolean, integer, float, then the raw string

use std::collections::BTreeMap;

use serde::Serialize;

/// Typed settings keyed by name.
pub type Settings = BTreeMap<String, SettingValue>;

/// A single coerced setting value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    /// All-digit values; never negative.
    Integer(u64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    /// Infer the value type from the raw text after `=`.
    pub fn infer(raw: &str) -> Self {
        let value = raw.trim();

        if value.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if value.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }

        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            return match value.parse::<u64>() {
                Ok(n) => Self::Integer(n),
                Err(_) => {
                    tracing::warn!(value = %value, "Integer setting out of range, keeping digits as text");
                    Self::Text(raw.to_string())
                }
            };
        }

        match parse_float(value) {
            Some(f) => Self::Float(f),
            None => Self::Text(raw.to_string()),
        }
    }
}

/// Float literal, also accepting `_` between digits (`1_000.5`).
fn parse_float(value: &str) -> Option<f64> {
    if !value.contains('_') {
        return value.parse().ok();
    }

    let bytes = value.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }
    value.replace('_', "").parse().ok()
}

/// Parse a settings string into typed values.
///
/// Malformed entries are logged at warn level and skipped.
pub fn parse_settings(input: &str) -> Settings {
    let entries: Vec<&str> = if input.contains(',') {
        input.split(',').collect()
    } else {
        vec![input]
    };

    let mut settings = Settings::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) => {
                settings.insert(key.trim().to_string(), SettingValue::infer(value));
            }
            None => {
                tracing::warn!(entry = %entry, "Ignoring invalid setting format");
            }
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_types() {
        let settings = parse_settings("k1=true,k2=3,k3=2.5,k4=hello");

        assert_eq!(settings.len(), 4);
        assert_eq!(settings["k1"], SettingValue::Bool(true));
        assert_eq!(settings["k2"], SettingValue::Integer(3));
        assert_eq!(settings["k3"], SettingValue::Float(2.5));
        assert_eq!(settings["k4"], SettingValue::Text("hello".into()));
    }

    #[test]
    fn test_malformed_entry_dropped() {
        let settings = parse_settings("a=1,bad,c=2");

        assert_eq!(settings.len(), 2);
        assert_eq!(settings["a"], SettingValue::Integer(1));
        assert_eq!(settings["c"], SettingValue::Integer(2));
        assert!(!settings.contains_key("bad"));
    }

    #[test]
    fn test_negative_number_is_float() {
        assert_eq!(SettingValue::infer("-5"), SettingValue::Float(-5.0));
    }

    #[test]
    fn test_boolean_case_insensitive() {
        assert_eq!(SettingValue::infer("TRUE"), SettingValue::Bool(true));
        assert_eq!(SettingValue::infer("False"), SettingValue::Bool(false));
        assert_eq!(SettingValue::infer(" true "), SettingValue::Bool(true));
    }

    #[test]
    fn test_single_entry_splits_on_first_equals() {
        let settings = parse_settings("FEED_URI=s3://bucket/key?a=b");

        assert_eq!(
            settings["FEED_URI"],
            SettingValue::Text("s3://bucket/key?a=b".into())
        );
    }

    #[test]
    fn test_keys_trimmed_text_kept_verbatim() {
        let settings = parse_settings(" USER_AGENT = my bot ,DEPTH= 2 ");

        assert_eq!(settings["USER_AGENT"], SettingValue::Text(" my bot ".into()));
        assert_eq!(settings["DEPTH"], SettingValue::Integer(2));
    }

    #[test]
    fn test_integer_edges() {
        // Non-ASCII digits are not integers.
        assert!(matches!(SettingValue::infer("٣"), SettingValue::Text(_)));
        assert_eq!(
            SettingValue::infer("18446744073709551615"),
            SettingValue::Integer(u64::MAX)
        );
        // Too large for an integer: digits kept exactly, never rounded.
        assert_eq!(
            SettingValue::infer("123456789012345678901"),
            SettingValue::Text("123456789012345678901".into())
        );
        assert_eq!(SettingValue::infer("007"), SettingValue::Integer(7));
        assert_eq!(SettingValue::infer(""), SettingValue::Text(String::new()));
    }

    #[test]
    fn test_digit_grouping_underscores() {
        assert_eq!(SettingValue::infer("1_000"), SettingValue::Float(1000.0));
        assert_eq!(SettingValue::infer("-2_500.5"), SettingValue::Float(-2500.5));
        assert_eq!(SettingValue::infer("1__0"), SettingValue::Text("1__0".into()));
        assert_eq!(SettingValue::infer("_10"), SettingValue::Text("_10".into()));
        assert_eq!(SettingValue::infer("10_"), SettingValue::Text("10_".into()));
    }

    #[test]
    fn test_comma_in_value_not_expressible() {
        let settings = parse_settings("ITEMS=a,b");

        assert_eq!(settings.len(), 1);
        assert_eq!(settings["ITEMS"], SettingValue::Text("a".into()));
    }

    #[test]
    fn test_trailing_comma_and_duplicates() {
        let settings = parse_settings("X=1,X=2,");

        assert_eq!(settings.len(), 1);
        assert_eq!(settings["X"], SettingValue::Integer(2));
    }

    #[test]
    fn test_untagged_json() {
        let settings = parse_settings("a=true,b=3,c=2.5,d=x");
        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json, serde_json::json!({"a": true, "b": 3, "c": 2.5, "d": "x"}));
    }
}
