/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Lenient coercions from decoded JSON into accessor values.
//!
//! Flickr is loose with its types: the same numeric field shows up as `5`, `"5"` or
//! `{"_content": "5"}` depending on the method. None of these functions fail; anything that
//! cannot be coerced is reported as `None`.

use crate::rest::RawFields;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

// Format of the calendar dates (`dates.taken`, `firstdatetaken`, ...)
const CALENDAR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Walks a path of keys through nested mappings
pub fn at<'a>(fields: &'a RawFields, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = fields.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    match current {
        Value::Null => None,
        v => Some(v),
    }
}

/// Unwraps the `{"_content": ...}` wrapper used for text nodes
pub fn content(value: &Value) -> &Value {
    match value.as_object().and_then(|o| o.get("_content")) {
        Some(inner) => inner,
        None => value,
    }
}

/// Parses strings and numbers as text
pub fn text(value: &Value) -> Option<String> {
    match content(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Same as [`text`] but "" is treated as absent
pub fn non_empty_text(value: &Value) -> Option<String> {
    text(value).filter(|s| !s.is_empty())
}

/// Parses integers given as numbers or numeric strings
pub fn int(value: &Value) -> Option<i64> {
    match content(value) {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-negative integers only
pub fn uint(value: &Value) -> Option<u64> {
    int(value).and_then(|i| u64::try_from(i).ok())
}

/// Parses floats given as numbers or numeric strings
pub fn float(value: &Value) -> Option<f64> {
    match content(value) {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses the "1"/"0" flag convention into a tri-state
pub fn flag(value: &Value) -> Option<bool> {
    match content(value) {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            other => other.parse::<i64>().ok().map(|i| i != 0),
        },
        _ => None,
    }
}

/// Parses a unix timestamp in seconds
pub fn epoch(value: &Value) -> Option<DateTime<Utc>> {
    int(value).and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Parses a calendar formatted "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD" string.
///
/// Flickr does not attach a timezone to these so they are taken as UTC.
pub fn calendar(value: &Value) -> Option<DateTime<Utc>> {
    let s = text(value)?;
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, CALENDAR_FORMAT)
        .or_else(|_| {
            NaiveDate::parse_from_str(s, CALENDAR_DATE_FORMAT)
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .ok()
        .map(|dt| dt.and_utc())
}

/// Accepts either representation, for fields whose format depends on the request
pub fn time(value: &Value) -> Option<DateTime<Utc>> {
    let is_epoch = match content(value) {
        Value::Number(_) => true,
        Value::String(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    };
    if is_epoch { epoch(value) } else { calendar(value) }
}

/// Space separated words, as used by the `tags` and `machine_tags` extras
pub fn words(value: &Value) -> Option<Vec<String>> {
    text(value).map(|s| s.split_whitespace().map(str::to_string).collect())
}

/// Items of a list that Flickr may have collapsed into a single mapping
pub fn items(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(list) => Some(list.iter().collect()),
        Value::Object(_) => Some(vec![value]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn flags_are_tri_state() {
        assert_eq!(flag(&json!("1")), Some(true));
        assert_eq!(flag(&json!("0")), Some(false));
        assert_eq!(flag(&json!(1)), Some(true));
        assert_eq!(flag(&json!(0)), Some(false));
        assert_eq!(flag(&json!(true)), Some(true));
        assert_eq!(flag(&json!("maybe")), None);

        let fields = json!({"isfavorite": 0}).as_object().cloned().unwrap();
        assert_eq!(at(&fields, &["isfavorite"]).and_then(flag), Some(false));
        assert_eq!(at(&fields, &["ispublic"]).and_then(flag), None);
    }

    #[test]
    fn integers_are_lenient() {
        assert_eq!(int(&json!("42")), Some(42));
        assert_eq!(int(&json!(42)), Some(42));
        assert_eq!(int(&json!({"_content": "7"})), Some(7));
        assert_eq!(int(&json!(" 3 ")), Some(3));
        assert_eq!(int(&json!("4x")), None);
        assert_eq!(int(&json!([1])), None);
        assert_eq!(uint(&json!("-1")), None);
        assert_eq!(float(&json!("-33.861")), Some(-33.861));
    }

    #[test]
    fn both_time_paths_produce_the_same_type() {
        let from_epoch = epoch(&json!("1360416623")).unwrap();
        let from_calendar = calendar(&json!("2013-02-09 13:30:23")).unwrap();
        assert_eq!(from_epoch, from_calendar);

        let date_only = calendar(&json!("2004-08-26")).unwrap();
        assert_eq!((date_only.year(), date_only.month(), date_only.day()), (2004, 8, 26));
        assert_eq!(date_only.hour(), 0);

        assert_eq!(time(&json!("1360416623")), Some(from_epoch));
        assert_eq!(time(&json!("2013-02-09 13:30:23")), Some(from_epoch));
        assert_eq!(calendar(&json!("0000-00-00 00:00:00")), None);
        assert_eq!(epoch(&json!("")), None);
    }

    #[test]
    fn nested_lookup_skips_nulls_and_non_mappings() {
        let fields = json!({
            "title": {"_content": "Sunset"},
            "owner": "12037949754@N01",
            "gone": null,
        })
        .as_object()
        .cloned()
        .unwrap();
        assert_eq!(at(&fields, &["title"]).and_then(text).as_deref(), Some("Sunset"));
        assert_eq!(at(&fields, &["owner", "nsid"]), None);
        assert_eq!(at(&fields, &["gone"]), None);
        assert_eq!(at(&fields, &[]), None);
    }

    #[test]
    fn words_split_on_whitespace() {
        assert_eq!(
            words(&json!("beach  sunset")).unwrap(),
            vec!["beach".to_string(), "sunset".to_string()]
        );
        assert!(words(&json!("")).unwrap().is_empty());
    }
}
