//! Core types: permission modes and errors

pub mod error;
pub mod mode;

pub use error::{ModePolicyError, ModePolicyResult};
pub use mode::PermissionMode;
