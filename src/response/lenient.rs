//! `deserialize_with` helpers that turn a wrongly typed attribute into `None`
//! instead of failing the whole object. Use together with `#[serde(default)]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::PartialDataWarning;

fn decode<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(err) => {
            let warning = PartialDataWarning::MalformedField(err);
            tracing::warn!(%warning, "partial report data");
            None
        }
    }
}

pub fn field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(decode(Value::deserialize(deserializer)?))
}

/// A list whose malformed items are dropped one by one.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(items) = decode::<Vec<Value>>(Value::deserialize(deserializer)?) else {
        return Ok(None);
    };
    Ok(Some(items.into_iter().filter_map(decode::<T>).collect()))
}
