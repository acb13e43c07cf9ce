pub mod config;
pub mod confirm;
pub mod pool;
pub mod validators;
pub mod valset;
