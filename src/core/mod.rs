//! Request and result types, error codes, and the crate error type.
//!
//! Everything here is plain data: no I/O happens in this module.

mod builder;
pub mod codes;
mod error;
mod types;

pub use builder::*;
pub use codes::{VALID_CODE, error_description, is_known_error_code};
pub use error::*;
pub use types::*;
