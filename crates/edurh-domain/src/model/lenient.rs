//! Field decoders that never reject a payload
//!
//! Backend payloads are partially formed more often than not: nulls where a
//! list is expected, strings where a number is expected. These helpers turn
//! whatever arrives into an `Option` or an empty collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integral value of a JSON number, rounding non-integral values
pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        }),
        _ => None,
    }
}

pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value))
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Keep array elements as raw values; anything else becomes empty
pub(crate) fn lenient_values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

/// Array elements that decode as `U`; other elements are skipped and a
/// non-array becomes empty
pub(crate) fn lenient_seq<'de, D, U>(deserializer: D) -> Result<Vec<U>, D::Error>
where
    D: Deserializer<'de>,
    U: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// String elements of an array (sets arrive as arrays too); others skipped
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_from_value() {
        assert_eq!(integer_from_value(&json!(5)), Some(5));
        assert_eq!(integer_from_value(&json!(-3)), Some(-3));
        assert_eq!(integer_from_value(&json!(4.6)), Some(5));
        assert_eq!(integer_from_value(&json!("5")), None);
        assert_eq!(integer_from_value(&Value::Null), None);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_integer")]
        number: Option<i64>,
        #[serde(default, deserialize_with = "lenient_strings")]
        names: Vec<String>,
        #[serde(default, deserialize_with = "lenient_string")]
        label: Option<String>,
    }

    #[test]
    fn test_lenient_fields_accept_garbage() {
        let probe: Probe =
            serde_json::from_value(json!({"number": "x", "names": null, "label": [1]})).unwrap();
        assert_eq!(probe.number, None);
        assert!(probe.names.is_empty());
        assert_eq!(probe.label, None);

        let probe: Probe =
            serde_json::from_value(json!({"number": 7, "names": ["Ana", 3, null]})).unwrap();
        assert_eq!(probe.number, Some(7));
        assert_eq!(probe.names, vec!["Ana".to_string(), "3".to_string()]);
    }

    #[derive(Debug, Deserialize)]
    struct Counts {
        #[serde(default, deserialize_with = "lenient_seq")]
        counts: Vec<u32>,
    }

    #[test]
    fn test_lenient_seq() {
        let counts: Counts = serde_json::from_value(json!({"counts": null})).unwrap();
        assert!(counts.counts.is_empty());

        let counts: Counts = serde_json::from_value(json!({"counts": {"a": 1}})).unwrap();
        assert!(counts.counts.is_empty());

        let counts: Counts =
            serde_json::from_value(json!({"counts": [4, "x", -1, null, 6]})).unwrap();
        assert_eq!(counts.counts, vec![4, 6]);
    }
}
