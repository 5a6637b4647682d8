//! Lenient decoding helpers.
//!
//! The revenue feed is aggregated from several backend tables and has grown
//! inconsistent over time: amounts arrive as JSON numbers or numeric strings,
//! dates as RFC 3339 timestamps or bare dates. The console's policy is to
//! coerce rather than fail: a malformed amount contributes zero, a malformed
//! date contributes nothing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Parses a string into a [`Decimal`], accepting scientific notation.
///
/// Falls back to zero when both parses fail, logging the offending value.
pub fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses a backend date string in any of the shapes the API emits:
/// RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare `YYYY-MM-DD`.
pub fn parse_datetime_flexible(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Deserializes a monetary amount as number, numeric string, or zero.
///
/// `null`, booleans, objects and unparseable strings all coerce to zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value, "amount"))
}

fn decimal_from_value(value: &serde_json::Value, field_name: &str) -> Decimal {
    match value {
        serde_json::Value::Number(n) => parse_decimal_tolerant(&n.to_string(), field_name),
        serde_json::Value::String(s) => parse_decimal_tolerant(s, field_name),
        serde_json::Value::Null => Decimal::ZERO,
        other => {
            log::error!(
                "Unexpected JSON shape for {}: {}. Falling back to ZERO.",
                field_name,
                other
            );
            Decimal::ZERO
        }
    }
}

/// Deserializes an enum-valued field, mapping unknown values to `None`.
pub fn enum_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            log::error!("Unrecognized enum value {}: {}", value, err);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_tolerant_plain() {
        assert_eq!(parse_decimal_tolerant("150000.25", "amount"), dec!(150000.25));
    }

    #[test]
    fn test_parse_decimal_tolerant_scientific() {
        assert_eq!(parse_decimal_tolerant("1.5e5", "amount"), dec!(150000));
    }

    #[test]
    fn test_parse_decimal_tolerant_garbage() {
        assert_eq!(parse_decimal_tolerant("abc", "amount"), Decimal::ZERO);
        assert_eq!(parse_decimal_tolerant("", "amount"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = parse_datetime_flexible("2024-05-01T10:30:00+07:00").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 03:30:00");
    }

    #[test]
    fn test_parse_datetime_naive() {
        let dt = parse_datetime_flexible("2024-05-01T10:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 10:30:00");
    }

    #[test]
    fn test_parse_datetime_date_only() {
        let dt = parse_datetime_flexible("2024-05-01").unwrap();
        assert_eq!(dt.to_string(), "2024-05-01 00:00:00");
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime_flexible("not a date").is_none());
        assert!(parse_datetime_flexible("05/01/2024").is_none());
    }

    #[derive(serde::Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "decimal_or_zero")]
        value: Decimal,
    }

    #[test]
    fn test_decimal_or_zero_number() {
        let parsed: Amount = serde_json::from_str(r#"{"value": 99.5}"#).unwrap();
        assert_eq!(parsed.value, dec!(99.5));
    }

    #[test]
    fn test_decimal_or_zero_string() {
        let parsed: Amount = serde_json::from_str(r#"{"value": "250000"}"#).unwrap();
        assert_eq!(parsed.value, dec!(250000));
    }

    #[test]
    fn test_decimal_or_zero_garbage_string() {
        let parsed: Amount = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
        assert_eq!(parsed.value, Decimal::ZERO);
    }

    #[test]
    fn test_decimal_or_zero_null_and_missing() {
        let parsed: Amount = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(parsed.value, Decimal::ZERO);
        let parsed: Amount = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, Decimal::ZERO);
    }

    #[test]
    fn test_decimal_or_zero_object() {
        let parsed: Amount = serde_json::from_str(r#"{"value": {"nested": 1}}"#).unwrap();
        assert_eq!(parsed.value, Decimal::ZERO);
    }
}
