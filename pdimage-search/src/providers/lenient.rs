//! Tolerant field deserializers for upstream response schemas.
//!
//! Archive APIs occasionally change the type of a field (an array where a
//! string was, a number where a URL was). With these helpers a field of the
//! wrong type reads as `None`, and a malformed list or map entry is dropped,
//! so the rest of the response still maps to records.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` on `Option` fields.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum Drifting<T> {
    Expected(T),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl<T> Drifting<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Drifting::Expected(value) => Some(value),
            Drifting::Other(_) => None,
        }
    }
}

/// A value of the wrong type becomes `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Drifting<T>>::deserialize(deserializer)?.and_then(Drifting::into_option))
}

/// A non-array becomes `None`; entries that do not fit `T` are dropped.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = lenient::<D, Vec<Value>>(deserializer)?;
    Ok(items.map(|items| {
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }))
}

/// A non-object becomes `None`; entries that do not fit `T` are dropped.
/// Entry order follows the document.
pub(crate) fn lenient_map<'de, D, T>(
    deserializer: D,
) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = lenient::<D, IndexMap<String, Value>>(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(key, value)| Some((key, serde_json::from_value(value).ok()?)))
            .collect()
    }))
}
