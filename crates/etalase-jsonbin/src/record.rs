//! Decoding of the fetched inventory record.
//!
//! Depending on bin configuration the store returns either the bare record
//! (`{"items": [...]}`) or a metadata wrapper (`{"record": {"items": [...]},
//! "metadata": ...}`). Both are accepted as an explicit contract; anything
//! else decodes to an empty catalog so the storefront degrades to "no
//! products" instead of an error page.

use serde_json::Value;

use etalase_core::catalog::RawInventoryItem;

/// Extracts inventory items from a fetched record body.
///
/// Accepted shapes, in order: `items` at the top level, `record.items` one
/// level down, otherwise an empty vec. Entries that are not JSON objects
/// are skipped with a warning; item-level field anomalies are handled
/// downstream by the lenient [`RawInventoryItem`] deserializer.
#[must_use]
pub fn decode_inventory(body: Value) -> Vec<RawInventoryItem> {
    let items = match extract_items(body) {
        Some(items) => items,
        None => {
            tracing::warn!("inventory record has neither items nor record.items, treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawInventoryItem>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, "skipping non-object inventory entry");
                None
            }
        })
        .collect()
}

fn extract_items(mut body: Value) -> Option<Vec<Value>> {
    if let Some(Value::Array(items)) = body.get_mut("items").map(Value::take) {
        return Some(items);
    }
    if let Some(record) = body.get_mut("record") {
        if let Some(Value::Array(items)) = record.get_mut("items").map(Value::take) {
            return Some(items);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_top_level_items() {
        let items = decode_inventory(json!({
            "items": [ { "id": 1, "name": "iPhone 13", "price": 9_000_000 } ]
        }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("iPhone 13"));
    }

    #[test]
    fn decodes_items_nested_under_record() {
        let items = decode_inventory(json!({
            "record": { "items": [ { "id": 1 }, { "id": 2 } ] },
            "metadata": { "id": "abc123", "private": true }
        }));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn top_level_items_wins_over_nested() {
        let items = decode_inventory(json!({
            "items": [ { "id": "outer" } ],
            "record": { "items": [ { "id": "inner" }, { "id": "inner-2" } ] }
        }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, json!("outer"));
    }

    #[test]
    fn unknown_shape_decodes_to_empty() {
        assert!(decode_inventory(json!({ "products": [] })).is_empty());
        assert!(decode_inventory(json!([1, 2, 3])).is_empty());
        assert!(decode_inventory(json!(null)).is_empty());
        assert!(decode_inventory(json!({ "record": { "stock": [] } })).is_empty());
    }

    #[test]
    fn items_must_be_an_array() {
        assert!(decode_inventory(json!({ "items": "not-a-list" })).is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped_not_fatal() {
        let items = decode_inventory(json!({
            "items": [ { "id": 1, "name": "Charger" }, 42, "garbage", { "id": 2 } ]
        }));
        assert_eq!(items.len(), 2);
    }
}
