//! Inventory and catalog types.
//!
//! ## Observed shape of the hosted inventory record
//!
//! Items are hand-entered through the store's admin sheet, so every field
//! can be missing or mistyped. Deserialization is deliberately lenient:
//! a malformed `name` or `price` degrades that one item, never the batch.
//!
//! ### `name`
//! Free-text product title and the sole input to category/image inference.
//! Occasionally absent or entered as a bare number; both are treated as an
//! empty string so the item falls through to the default category.
//!
//! ### `price`
//! Whole rupiah units (no fractional part). Absent or `null` for items
//! still being listed; defaulted to `0` and flagged during normalization.
//!
//! ### `status`
//! `"stok"` marks a sellable item. Anything else (`"sold"`, `"hold"`, a
//! missing field) is treated as not in stock when filtering is on.
//!
//! ### `type`
//! `"new"` vs anything else (used). Renamed to `item_type` because `type`
//! is reserved.
//!
//! ### Passthrough fields
//! The record carries internal bookkeeping (`entryDate`, `soldAt`, …) the
//! admin dashboard needs but the storefront must never see. They are
//! captured opaquely via `#[serde(flatten)]` and kept or stripped per
//! consumer by the normalizer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::price::PriceValue;

/// A single item as stored in the hosted inventory record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInventoryItem {
    /// Opaque identifier, unique within the record. Passed through as-is.
    #[serde(default)]
    pub id: Value,

    /// Product title. `None` when absent or not a string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Price in whole rupiah. `None` when absent, `null`, or non-numeric.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<i64>,

    /// Stock status; `"stok"` means sellable.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,

    /// `"new"` or anything else (treated as used).
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub item_type: Option<String>,

    /// Internal bookkeeping fields (`entryDate`, `soldAt`, …), opaque here.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Accepts any JSON value; yields `Some` only for strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts any JSON value; yields `Some` only for numbers, truncating any
/// fractional part (prices are whole rupiah units).
#[allow(clippy::cast_possible_truncation)]
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// Device category inferred from the product name.
///
/// Serialized with the storefront's display strings (the frontend filter
/// tabs match on these exact values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceCategory {
    Laptop,
    Apple,
    Android,
    #[serde(rename = "Aksesoris")]
    Accessory,
}

/// The public-facing view of one inventory item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicProduct {
    pub id: Value,
    pub name: String,
    pub price: PriceValue,
    #[serde(rename = "deviceCategory")]
    pub device_category: DeviceCategory,
    pub condition: &'static str,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'static str>,
    /// Raw stock status, forwarded only to the admin consumer — the
    /// dashboard counts sold items for its trust stats. Absent in public
    /// output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Raw `type` value as stored, forwarded only to the admin consumer.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Set when the source item had no usable price; lets the dashboard
    /// exclude the row from sales sums instead of counting a silent zero.
    #[serde(rename = "priceDefaulted", skip_serializing_if = "is_false")]
    pub price_defaulted: bool,
    /// Internal fields forwarded only to the admin consumer; empty (and
    /// therefore absent from the JSON) for the public storefront.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}
