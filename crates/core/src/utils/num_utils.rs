//! Numeric normalization helpers.
//!
//! Monetary fields arrive from external sources (JSON exports, spreadsheet
//! dumps) where a "number" may in practice be a string, null, or absent.
//! Deserialization keeps such values as NaN so they can be distinguished from
//! real zeros; `safe_number` is the single normalization rule applied before
//! any aggregation.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Normalizes an arbitrary numeric value for aggregation.
///
/// Finite, non-negative values pass through unchanged; everything else
/// (NaN, infinities, negatives) becomes zero so a malformed holding
/// contributes nothing to a total instead of poisoning it.
pub fn safe_number(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Coerces a raw JSON value to `f64`, yielding NaN for anything that is not
/// a number or a parseable numeric string.
fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

// Custom serializer/deserializer for monetary f64 fields (lenient on input)
pub mod lenient_num {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(coerce_value(&raw))
    }
}

// Custom serializer/deserializer for Option<f64>
pub mod lenient_num_option {
    use super::*;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(raw.map(|v| coerce_value(&v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_number_passes_finite_non_negative() {
        assert_eq!(safe_number(0.0), 0.0);
        assert_eq!(safe_number(1234.56), 1234.56);
    }

    #[test]
    fn test_safe_number_zeroes_invalid_values() {
        assert_eq!(safe_number(f64::NAN), 0.0);
        assert_eq!(safe_number(f64::INFINITY), 0.0);
        assert_eq!(safe_number(f64::NEG_INFINITY), 0.0);
        assert_eq!(safe_number(-500.0), 0.0);
    }

    #[test]
    fn test_coerce_value_numbers_and_strings() {
        assert_eq!(coerce_value(&json!(42.5)), 42.5);
        assert_eq!(coerce_value(&json!("42.5")), 42.5);
        assert_eq!(coerce_value(&json!(" 7 ")), 7.0);
    }

    #[test]
    fn test_coerce_value_non_numeric_is_nan() {
        assert!(coerce_value(&json!("not-a-number")).is_nan());
        assert!(coerce_value(&json!(null)).is_nan());
        assert!(coerce_value(&json!(true)).is_nan());
        assert!(coerce_value(&json!([1, 2])).is_nan());
    }
}
