//! The inventory-to-catalog normalization pipeline.
//!
//! Pure and stateless: raw inventory items in, public product records out.
//! All I/O (the upstream fetch, the HTTP response) lives in the client and
//! server crates; nothing here blocks or awaits.

mod classify;
mod normalize;
mod price;
mod types;

pub use classify::{classify_device, classify_image};
pub use normalize::{
    normalize, ConditionStyle, FieldPassthrough, FilterMode, NormalizeOptions, STOCK_STATUS,
};
pub use price::{format_idr, format_price, PriceFormat, PriceValue};
pub use types::{DeviceCategory, PublicProduct, RawInventoryItem};
