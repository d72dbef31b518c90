//! Lenient field decoders for loosely typed backend rows.
//!
//! Rows come straight from a data frame dump, so any column may hold `null`, a number, or
//! something unexpected. Numeric readers keep finite JSON numbers and treat everything else
//! as absent instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn number_of(v: &Value) -> Option<f64> {
    v.as_f64().filter(|f| f.is_finite())
}

pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.as_ref().and_then(number_of))
}

pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Years arrive as `2021`, `2021.0`, `"2021"` or `null`. Fractional years are truncated.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn de_lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    let year = match v {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        Some(other) => number_of(&other),
        None => None,
    };
    Ok(year.filter(|f| f.abs() < 1e15).map(|f| f.trunc() as i64))
}

/// A list that may be missing, `null`, or contain `null` entries.
pub(crate) fn de_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}
