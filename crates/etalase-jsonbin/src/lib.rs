mod client;
mod error;
mod record;

pub use client::BinClient;
pub use error::JsonbinError;
pub use record::decode_inventory;
