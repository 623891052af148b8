//! Gateway types module
//!
//! - [`response`]: response envelope, handler error type and error codes

pub mod response;

pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
