//! Lenient serde helpers shared by the endpoint models.
//!
//! Sleeper's payloads are undocumented in places and inconsistent across
//! endpoints: fields flip between `null`, numbers and numeric strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// An upstream value whose shape is not fixed. Inspect it with the `serde_json::Value` API.
pub type Opaque = serde_json::Value;

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `12`, `12.0`, `"12"` or `null`; anything unparseable becomes `None`.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[allow(clippy::cast_possible_truncation)]
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a number, a numeric string or `null`; anything else becomes `None`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Accepts a string, a number (rendered as text) or `null`; anything else becomes `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A block of named statistics (`"pts_ppr" -> 18.4`).
///
/// Entries that are not numbers are dropped instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct StatLine(HashMap<String, f64>);

impl StatLine {
    /// The value for a stat key, if the upstream reported it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Number of numeric stats present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'de> Deserialize<'de> for StatLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<HashMap<String, serde_json::Value>>::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .filter_map(|(k, v)| v.as_f64().map(|f| (k, f)))
                .collect(),
        ))
    }
}
