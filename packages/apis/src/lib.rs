pub mod error;
pub mod events;
pub mod pool_api;
mod validate;
pub mod valset_api;

pub use error::ApiError;
pub use validate::{normalize_eth_address, TransferRequest, Validate};
