//! Error handling for the hand cricket client.

pub mod error_code;

pub use error_code::ErrorCode;
