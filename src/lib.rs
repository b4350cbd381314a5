//! Permission-mode policy surface for an interactive coding agent
//!
//! Decides which autonomy levels a user may select for the agent's
//! file-editing behavior. The dangerous `bypassPermissions` mode is hidden
//! unless explicitly enabled via the `ENABLE_BYPASS_MODE` environment
//! variable, and the same allow-list drives both the mode-selection UI and
//! the enforcement engine downstream.

pub mod core;
pub mod env;
pub mod policy;

// Build and dev-server plumbing
pub mod config;
pub mod logging;

pub use crate::core::{ModePolicyError, ModePolicyResult, PermissionMode};
pub use env::{EnvSource, ProcessEnv, StaticEnv};
pub use policy::{PermissionPolicy, BYPASS_MODE_KEY};
