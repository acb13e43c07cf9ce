pub mod address;
pub mod checkpoint;
pub mod error;
pub mod hash;
pub mod signature;

pub use address::EthAddress;
pub use checkpoint::checkpoint_hash;
pub use error::EthereumError;
pub use hash::keccak256;
pub use signature::recover_eth_address;

pub type Result<T> = std::result::Result<T, EthereumError>;
