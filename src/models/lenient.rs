// src/models/lenient.rs
// Field decoders for model-written JSON: nulls and mistyped scalars become defaults
// instead of failing the whole document.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

pub fn day_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(number.and_then(|n| u32::try_from(n).ok()).unwrap_or_default())
}

/// Nested objects: anything that does not decode falls back to the default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Lists: `null` or a non-array is empty, and entries that do not decode are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        name: String,
        #[serde(deserialize_with = "float")]
        score: f64,
        #[serde(deserialize_with = "day_number")]
        day: u32,
        #[serde(deserialize_with = "list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_nulls_become_defaults() {
        let sample: Sample =
            serde_json::from_value(json!({"name": null, "score": null, "day": null, "tags": null})).unwrap();
        assert_eq!(sample.name, "");
        assert_eq!(sample.score, 0.0);
        assert_eq!(sample.day, 0);
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_scalars_written_as_the_wrong_type() {
        let sample: Sample =
            serde_json::from_value(json!({"name": 42, "score": " 4.5 ", "day": "3", "tags": ["a", 1, "b"]}))
                .unwrap();
        assert_eq!(sample.name, "42");
        assert_eq!(sample.score, 4.5);
        assert_eq!(sample.day, 3);
        assert_eq!(sample.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_unparseable_numbers_fall_back_to_zero() {
        let sample: Sample = serde_json::from_value(json!({"score": "4.5/5", "day": -2})).unwrap();
        assert_eq!(sample.score, 0.0);
        assert_eq!(sample.day, 0);
    }
}
