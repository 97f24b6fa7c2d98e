//! Normalization from raw inventory items to [`PublicProduct`] records.
//!
//! The handler variants that grew up around the original endpoint (public
//! storefront with and without images, admin dashboard with raw prices and
//! full passthrough) are presets of one [`NormalizeOptions`]; the pipeline
//! itself exists exactly once.

use super::classify::{classify_device, classify_image};
use super::price::{format_price, PriceFormat};
use super::types::{PublicProduct, RawInventoryItem};

pub use super::price::PriceValue;

/// Sentinel `status` value marking a sellable item.
pub const STOCK_STATUS: &str = "stok";

/// Whether unavailable items are dropped before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep only `status == "stok"`; absence counts as not in stock.
    InStockOnly,
    /// Keep everything — the admin dashboard derives trust/sales stats
    /// from sold and hidden items too.
    All,
}

/// Which rendering of the condition label the consumer gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionStyle {
    /// `"Baru (BNOB)"` / `"Second Prima"`.
    Long,
    /// `"Baru"` / `"Second Prima"`.
    Short,
}

impl ConditionStyle {
    fn label(self, is_new: bool) -> &'static str {
        match (self, is_new) {
            (ConditionStyle::Long, true) => "Baru (BNOB)",
            (ConditionStyle::Short, true) => "Baru",
            (_, false) => "Second Prima",
        }
    }
}

/// Whether internal bookkeeping fields survive into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPassthrough {
    /// Forward unknown fields (`entryDate`, `soldAt`, …) — trusted consumer.
    Keep,
    /// Drop them — public storefront must not see internal fields.
    Strip,
}

/// Configuration for one normalization pass.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub filter: FilterMode,
    /// Attach a static stock-photo URL per item.
    pub images: bool,
    pub price: PriceFormat,
    pub condition_style: ConditionStyle,
    pub passthrough: FieldPassthrough,
}

impl NormalizeOptions {
    /// The public storefront preset: in-stock only, images on, display
    /// prices, long condition labels, internal fields stripped.
    #[must_use]
    pub fn public_storefront() -> Self {
        Self {
            filter: FilterMode::InStockOnly,
            images: true,
            price: PriceFormat::Idr,
            condition_style: ConditionStyle::Long,
            passthrough: FieldPassthrough::Strip,
        }
    }

    /// The admin dashboard preset: everything flows through (sold items
    /// feed the trust stats) with raw numeric prices for arithmetic.
    #[must_use]
    pub fn admin_dashboard() -> Self {
        Self {
            filter: FilterMode::All,
            images: false,
            price: PriceFormat::Raw,
            condition_style: ConditionStyle::Short,
            passthrough: FieldPassthrough::Keep,
        }
    }
}

/// Runs the full pipeline: optional availability filter, device and image
/// classification, condition label, price rendering, assembly.
///
/// Pure and idempotent. Per-item anomalies (missing name or price) are
/// defaulted and logged at `warn`; one malformed item never blanks the
/// catalog.
#[must_use]
pub fn normalize(items: Vec<RawInventoryItem>, options: &NormalizeOptions) -> Vec<PublicProduct> {
    items
        .into_iter()
        .filter(|item| match options.filter {
            FilterMode::InStockOnly => item.status.as_deref() == Some(STOCK_STATUS),
            FilterMode::All => true,
        })
        .map(|item| normalize_item(item, options))
        .collect()
}

fn normalize_item(item: RawInventoryItem, options: &NormalizeOptions) -> PublicProduct {
    let name = item.name.unwrap_or_else(|| {
        tracing::warn!(id = %item.id, "inventory item has no usable name, defaulting to empty");
        String::new()
    });

    let price_defaulted = item.price.is_none();
    let amount = item.price.unwrap_or_else(|| {
        tracing::warn!(id = %item.id, "inventory item has no usable price, defaulting to 0");
        0
    });

    let is_new = item.item_type.as_deref() == Some("new");

    // The trusted consumer gets the raw status and type back (sold counts
    // feed its trust stats); the storefront sees neither.
    let (status, item_type, extra) = match options.passthrough {
        FieldPassthrough::Keep => (item.status, item.item_type, item.extra),
        FieldPassthrough::Strip => (None, None, serde_json::Map::new()),
    };

    PublicProduct {
        id: item.id,
        device_category: classify_device(&name),
        image_url: options.images.then(|| classify_image(&name)),
        condition: options.condition_style.label(is_new),
        price: format_price(amount, options.price),
        status,
        item_type,
        price_defaulted,
        extra,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeviceCategory;
    use serde_json::json;

    fn item(name: &str, price: i64, status: &str, item_type: &str) -> RawInventoryItem {
        serde_json::from_value(json!({
            "id": name.to_lowercase().replace(' ', "-"),
            "name": name,
            "price": price,
            "status": status,
            "type": item_type,
            "soldAt": null,
            "entryDate": "2025-10-01"
        }))
        .expect("fixture item should deserialize")
    }

    fn sample_batch() -> Vec<RawInventoryItem> {
        vec![
            item("iPhone 13 Pro", 9_500_000, "stok", "used"),
            item("Samsung Galaxy A54", 3_200_000, "sold", "new"),
            item("USB-C Cable", 35_000, "stok", "new"),
        ]
    }

    #[test]
    fn public_mode_keeps_only_stock_items() {
        let out = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.name != "Samsung Galaxy A54"));
    }

    #[test]
    fn admin_mode_keeps_everything() {
        let out = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn missing_status_counts_as_not_in_stock() {
        let no_status: RawInventoryItem =
            serde_json::from_value(json!({ "id": 1, "name": "Case", "price": 50_000 }))
                .expect("should deserialize");
        let out = normalize(vec![no_status], &NormalizeOptions::public_storefront());
        assert!(out.is_empty());
    }

    #[test]
    fn categories_and_conditions_derive_per_item() {
        let out = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        assert_eq!(out[0].device_category, DeviceCategory::Apple);
        assert_eq!(out[0].condition, "Second Prima");
        assert_eq!(out[1].device_category, DeviceCategory::Android);
        assert_eq!(out[1].condition, "Baru");
        assert_eq!(out[2].device_category, DeviceCategory::Accessory);
    }

    #[test]
    fn long_condition_label_in_public_mode() {
        let out = normalize(
            vec![item("USB-C Cable", 35_000, "stok", "new")],
            &NormalizeOptions::public_storefront(),
        );
        assert_eq!(out[0].condition, "Baru (BNOB)");
    }

    #[test]
    fn public_prices_are_grouped_strings() {
        let out = normalize(
            vec![item("iPhone 13 Pro", 2_500_000, "stok", "used")],
            &NormalizeOptions::public_storefront(),
        );
        assert_eq!(out[0].price, PriceValue::Formatted("Rp2.500.000".into()));
    }

    #[test]
    fn admin_prices_stay_numeric() {
        let out = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        assert_eq!(out[1].price, PriceValue::Raw(3_200_000));
    }

    #[test]
    fn images_only_when_enabled() {
        let public = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        assert!(public.iter().all(|p| p.image_url.is_some()));

        let admin = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        assert!(admin.iter().all(|p| p.image_url.is_none()));
    }

    #[test]
    fn passthrough_stripped_for_public_kept_for_admin() {
        let public = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        assert!(public.iter().all(|p| p.extra.is_empty()));

        let admin = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        assert_eq!(admin[0].extra["entryDate"], json!("2025-10-01"));

        // soldAt must never reach the public JSON.
        let rendered = serde_json::to_string(&public).expect("serialize");
        assert!(!rendered.contains("soldAt"));
    }

    #[test]
    fn admin_output_retains_status_and_raw_type() {
        let out = normalize(sample_batch(), &NormalizeOptions::admin_dashboard());
        // The dashboard counts sold items, so the raw fields must survive.
        assert_eq!(out[1].status.as_deref(), Some("sold"));
        assert_eq!(out[1].item_type.as_deref(), Some("new"));

        let rendered = serde_json::to_value(&out).expect("serialize");
        assert_eq!(rendered[1]["status"], json!("sold"));
        assert_eq!(rendered[1]["type"], json!("new"));
    }

    #[test]
    fn public_output_omits_status_and_raw_type() {
        let out = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        assert!(out.iter().all(|p| p.status.is_none() && p.item_type.is_none()));

        let rendered = serde_json::to_value(&out).expect("serialize");
        assert!(rendered[0].get("status").is_none());
        assert!(rendered[0].get("type").is_none());
    }

    #[test]
    fn absent_type_counts_as_used() {
        let untyped: RawInventoryItem = serde_json::from_value(json!({
            "id": 3,
            "name": "USB-C Cable",
            "price": 35_000,
            "status": "stok"
        }))
        .expect("should deserialize");
        let out = normalize(vec![untyped], &NormalizeOptions::public_storefront());
        assert_eq!(out[0].condition, "Second Prima");
    }

    #[test]
    fn malformed_item_defaults_instead_of_aborting_batch() {
        let mut batch = sample_batch();
        batch[1] = serde_json::from_value(json!({
            "id": "broken",
            "name": "Samsung Galaxy A54",
            "price": null,
            "status": "stok",
            "type": "new"
        }))
        .expect("should deserialize");

        let out = normalize(batch, &NormalizeOptions::admin_dashboard());
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].price, PriceValue::Raw(0));
        assert!(out[1].price_defaulted);
        assert!(!out[0].price_defaulted);
    }

    #[test]
    fn missing_name_yields_default_category() {
        let nameless: RawInventoryItem =
            serde_json::from_value(json!({ "id": 9, "price": 10_000, "status": "stok" }))
                .expect("should deserialize");
        let out = normalize(vec![nameless], &NormalizeOptions::public_storefront());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "");
        assert_eq!(out[0].device_category, DeviceCategory::Accessory);
    }

    #[test]
    fn normalization_is_idempotent_across_calls() {
        let a = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        let b = normalize(sample_batch(), &NormalizeOptions::public_storefront());
        assert_eq!(a, b);
    }
}
