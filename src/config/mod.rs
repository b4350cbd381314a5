//! Build and dev-server configuration
//!
//! Typed configuration for the frontend dev server and the CLI bundling step.
//! This is configuration data only: the bundler and the dev server themselves
//! are external collaborators that consume these values.

pub mod bundle;
pub mod dev_server;

pub use bundle::BundleConfig;
pub use dev_server::{DevServerConfig, ProxyConfig, TestRunnerConfig};
