//! Permission-mode policy gate
//!
//! Decides which permission modes the UI may offer. The three base modes are
//! always available; the dangerous `bypassPermissions` mode is only exposed
//! when explicitly enabled through the environment.
//!
//! ## Example
//!
//! ```rust
//! use permission_modes::env::StaticEnv;
//! use permission_modes::policy::{PermissionPolicy, BYPASS_MODE_KEY};
//!
//! let policy = PermissionPolicy::new(StaticEnv::new().with_var(BYPASS_MODE_KEY, "true"));
//! assert!(policy.is_mode_available("bypassPermissions"));
//! ```

mod gate;

pub use gate::{PermissionPolicy, BYPASS_MODE_KEY};
