//! Lenient field decoders for the platform's loosely typed JSON
//!
//! Every intermediate struct in this crate decodes its fields through these
//! helpers so that a missing key, a `null`, or a value of the wrong type turns
//! into `None` instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a JSON object into `T`, or `None` for anything else.
///
/// Derived struct impls also accept a JSON array and read it positionally,
/// so the object check has to happen before handing the value to serde.
pub(crate) fn from_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    value.as_object()?;
    T::deserialize(value).ok()
}

/// Decode a scalar or object field as `T`, or `None` when the value has the
/// wrong shape. Arrays are always rejected; list fields use [`lenient_list`].
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_array() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Decode a list field, or `None` when the value is not a JSON array.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_array() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Decode a count or timestamp sent either as a JSON number or a numeric string.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decode a coordinate sent either as a JSON number or a numeric string.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Decode an identifier. Ids show up as strings on some endpoints and bare
/// numbers on others; both become a `String`. Empty strings are rejected.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// `{"count": N}` wrapper used for likes, comments, followers and media totals.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Count {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: Option<u64>,
}

/// Read the `count` out of an optional `{"count": N}` wrapper.
pub(crate) fn count_of(wrapper: Option<Count>) -> Option<u64> {
    wrapper.and_then(|c| c.count)
}
