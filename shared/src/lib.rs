pub mod balance;
pub mod error;
pub mod hbar;
pub mod log_config;
pub mod proto;
pub mod token;
