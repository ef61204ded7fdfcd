//! Tolerant field decoders.
//!
//! The checkout API is not consistent about numeric fields: the same column
//! arrives as `3`, `"3"` or `null` depending on the endpoint. These helpers are
//! used with `#[serde(deserialize_with = ...)]`.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn to_i64(&self) -> Option<i64> {
        match self {
            NumberOrString::Int(v) => Some(*v),
            NumberOrString::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            NumberOrString::Float(_) => None,
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Integer that may be encoded as a number or a numeric string.
pub fn required_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = NumberOrString::deserialize(deserializer)?;
    raw.to_i64()
        .ok_or_else(|| de::Error::custom("expected an integer or a numeric string"))
}

/// Optional integer; `null`, empty strings and non-numeric text become `None`.
pub fn optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.to_i64()))
}

/// Stock count: missing or unreadable values become 0, negatives clamp to 0.
pub fn stock_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = optional_i64(deserializer)?.unwrap_or(0);
    Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}
