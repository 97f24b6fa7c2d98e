//! Keyword classification over product names.
//!
//! Two independent tables: one infers the device category the storefront
//! filters on, the other picks a static stock photo. They group brands
//! differently (the image table lumps vivo/infinix/techno into one family
//! the category table does not), so they must stay separate.
//!
//! Both match case-insensitively, anywhere in the name, first table entry
//! wins. The category order (Laptop, then Apple, then Android) is a
//! contract with the stored inventory: "Apple MacBook Pro" must classify
//! as Laptop, not Apple. New keywords may be appended; the order never
//! changes.

use super::types::DeviceCategory;

const LAPTOP_KEYWORDS: &[&str] = &[
    "macbook",
    "laptop",
    "notebook",
    "chromebook",
    "asus",
    "acer",
    "lenovo",
    "hp",
    "msi",
    "axioo",
    "zyrex",
];

const APPLE_KEYWORDS: &[&str] = &["iphone", "ipad", "apple"];

const ANDROID_KEYWORDS: &[&str] = &[
    "samsung", "galaxy", "xiaomi", "poco", "redmi", "oppo", "vivo", "realme", "infinix", "tecno",
    "techno", "itel", "note", "reno", "spark", "pixel",
];

fn contains_any(name_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name_lower.contains(k))
}

/// Infers the device category from a product name.
///
/// Empty or keyword-free names fall through to [`DeviceCategory::Accessory`].
#[must_use]
pub fn classify_device(name: &str) -> DeviceCategory {
    let name_lower = name.to_lowercase();
    if contains_any(&name_lower, LAPTOP_KEYWORDS) {
        DeviceCategory::Laptop
    } else if contains_any(&name_lower, APPLE_KEYWORDS) {
        DeviceCategory::Apple
    } else if contains_any(&name_lower, ANDROID_KEYWORDS) {
        DeviceCategory::Android
    } else {
        DeviceCategory::Accessory
    }
}

// Stock photos served from the storefront's asset host. One image per brand
// family; no per-product matching.
const IMG_APPLE: &str = "https://assets.etalase.id/stock/apple-device.jpg";
const IMG_SAMSUNG: &str = "https://assets.etalase.id/stock/samsung-galaxy.jpg";
const IMG_XIAOMI: &str = "https://assets.etalase.id/stock/xiaomi-family.jpg";
const IMG_BBK: &str = "https://assets.etalase.id/stock/oppo-vivo-family.jpg";
const IMG_DEFAULT: &str = "https://assets.etalase.id/stock/gadget-generic.jpg";

const IMG_APPLE_KEYWORDS: &[&str] = &["iphone", "ipad", "apple", "macbook"];
const IMG_SAMSUNG_KEYWORDS: &[&str] = &["samsung", "galaxy"];
const IMG_XIAOMI_KEYWORDS: &[&str] = &["xiaomi", "poco", "redmi"];
const IMG_BBK_KEYWORDS: &[&str] = &["oppo", "vivo", "realme", "infinix", "techno"];

/// Picks a static stock-photo URL for a product name.
///
/// Priority: Apple family, then Samsung, then the Xiaomi family, then the
/// Oppo/Vivo family, then a generic gadget image.
#[must_use]
pub fn classify_image(name: &str) -> &'static str {
    let name_lower = name.to_lowercase();
    if contains_any(&name_lower, IMG_APPLE_KEYWORDS) {
        IMG_APPLE
    } else if contains_any(&name_lower, IMG_SAMSUNG_KEYWORDS) {
        IMG_SAMSUNG
    } else if contains_any(&name_lower, IMG_XIAOMI_KEYWORDS) {
        IMG_XIAOMI
    } else if contains_any(&name_lower, IMG_BBK_KEYWORDS) {
        IMG_BBK
    } else {
        IMG_DEFAULT
    }
}
