//! Response normalizer
//!
//! The checkout API wraps lists in at least three different envelopes
//! depending on the endpoint:
//!
//! - a bare array: `[...]`
//! - a data envelope, optionally with a success flag: `{"success": true, "data": [...]}`
//! - a paginator: `{"data": {"data": [...], "current_page": 1, ...}}`
//!
//! [`Envelope::classify`] names the shape once and [`normalize`] turns any of
//! them into a typed list. Nothing here fails: unknown shapes and rows that do
//! not decode degrade to an empty (or shorter) list.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Recognised response shapes, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The payload itself is the array
    Bare,
    /// `{"success": <bool>, "data": [...]}`; `ok` is the flag as sent
    Success { ok: bool },
    /// `{"data": [...]}` without a success flag
    Data,
    /// `{"data": {"data": [...]}}`
    Paginated,
    /// Anything else
    Unrecognized,
}

impl Envelope {
    pub fn classify(value: &Value) -> Self {
        if value.is_array() {
            return Envelope::Bare;
        }
        match value.get("data") {
            Some(Value::Array(_)) => match value.get("success") {
                Some(flag) => Envelope::Success {
                    ok: flag.as_bool().unwrap_or(false),
                },
                None => Envelope::Data,
            },
            Some(inner) if inner.get("data").is_some_and(Value::is_array) => Envelope::Paginated,
            _ => Envelope::Unrecognized,
        }
    }

    /// Move the embedded array out of `value`
    fn take_items(self, value: Value) -> Vec<Value> {
        let array = match self {
            Envelope::Bare => Some(value),
            Envelope::Success { .. } | Envelope::Data => take_field(value, "data"),
            Envelope::Paginated => take_field(value, "data").and_then(|inner| take_field(inner, "data")),
            Envelope::Unrecognized => None,
        };
        match array {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        }
    }
}

fn take_field(value: Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
}

/// Extract the raw rows of any recognised envelope
pub fn extract_rows(value: Value) -> Vec<Value> {
    let envelope = Envelope::classify(&value);
    if let Envelope::Success { ok: false } = envelope {
        // still usable, the flag is advisory
        log::debug!("envelope carries success=false alongside data; using the data");
    }
    if envelope == Envelope::Unrecognized {
        log::debug!("unrecognized response envelope; treating as empty list");
    }
    envelope.take_items(value)
}

/// Normalize a decoded JSON payload into a typed list.
///
/// Rows that fail to decode as `T` are skipped and logged.
pub fn normalize<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let rows = extract_rows(value);
    let total = rows.len();
    let items: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<T>(row) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("skipping row {} of {}: {}", index, total, e);
                None
            }
        })
        .collect();
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_equipment::aggregate::EquipmentItem;
    use contracts::domain::a002_category::aggregate::Category;
    use serde_json::json;

    fn ids(value: Value) -> Vec<i64> {
        normalize::<EquipmentItem>(value)
            .into_iter()
            .map(|i| i.id.value())
            .collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(Envelope::classify(&json!([])), Envelope::Bare);
        assert_eq!(
            Envelope::classify(&json!({"success": true, "data": []})),
            Envelope::Success { ok: true }
        );
        assert_eq!(Envelope::classify(&json!({"data": []})), Envelope::Data);
        assert_eq!(
            Envelope::classify(&json!({"data": {"data": [], "current_page": 1}})),
            Envelope::Paginated
        );
        assert_eq!(Envelope::classify(&json!({})), Envelope::Unrecognized);
        assert_eq!(Envelope::classify(&json!({"data": {"items": []}})), Envelope::Unrecognized);
        assert_eq!(Envelope::classify(&json!("oops")), Envelope::Unrecognized);
        assert_eq!(Envelope::classify(&Value::Null), Envelope::Unrecognized);
    }

    #[test]
    fn test_all_shapes_yield_embedded_array() {
        let rows = json!([{"id": 1, "brand": "Dell"}, {"id": 2, "brand": "HP"}]);
        assert_eq!(ids(rows.clone()), vec![1, 2]);
        assert_eq!(ids(json!({"success": true, "data": rows.clone()})), vec![1, 2]);
        assert_eq!(ids(json!({"data": rows.clone()})), vec![1, 2]);
        assert_eq!(ids(json!({"data": {"data": rows, "total": 2}})), vec![1, 2]);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        assert!(ids(json!({})).is_empty());
        assert!(ids(json!({"success": true})).is_empty());
        assert!(ids(json!({"data": null})).is_empty());
        assert!(ids(json!({"data": {"data": "nope"}})).is_empty());
        assert!(ids(json!(42)).is_empty());
    }

    #[test]
    fn test_falsy_success_still_yields_data() {
        let value = json!({"success": false, "data": [{"id": 5}]});
        assert_eq!(Envelope::classify(&value), Envelope::Success { ok: false });
        assert_eq!(ids(value), vec![5]);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let value = json!({"data": [{"id": 1}, {"brand": "no id"}, "junk", {"id": "3"}]});
        assert_eq!(ids(value), vec![1, 3]);
    }

    #[test]
    fn test_order_is_preserved() {
        let cats: Vec<Category> = normalize(json!([
            {"id": 3, "name": "Projectors"},
            {"id": 1, "name": "Laptops"},
            {"name": "Cables"}
        ]));
        let names: Vec<_> = cats.iter().map(|c| c.tile_label()).collect();
        assert_eq!(names, vec!["Projectors", "Laptops", "Cables"]);
    }
}
