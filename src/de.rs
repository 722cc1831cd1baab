//! Deserialize helpers for the shapes the server produces.

use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Reads `null` as the default value, the server sends empty lists and maps that way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Reads a single string or a list of strings, `null` is an empty list.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
        None => Vec::new(),
    })
}

pub(crate) fn optional_seconds<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Audience {
        #[serde(default, deserialize_with = "one_or_many")]
        aud: Vec<String>,
    }

    fn audience(value: serde_json::Value) -> Vec<String> {
        serde_json::from_value::<Audience>(value).unwrap().aud
    }

    #[test]
    fn audience_shapes() {
        assert_eq!(audience(json!({ "aud": "a" })), vec!["a".to_string()]);
        assert_eq!(audience(json!({ "aud": ["a", "b"] })).len(), 2);
        assert!(audience(json!({ "aud": null })).is_empty());
        assert!(audience(json!({})).is_empty());
    }
}
