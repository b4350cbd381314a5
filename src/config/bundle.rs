//! CLI bundle configuration
//!
//! Describes the bundling step that compiles the CLI entry point into a
//! single executable module for a server-side runtime. The bundler itself is
//! an external tool; this is the typed invocation it consumes.

use serde::{Deserialize, Serialize};

/// Runtime platform the bundle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlePlatform {
    /// Server-side Node.js runtime
    Node,
    /// Browser runtime
    Browser,
}

/// Output module format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// ECMAScript modules
    Esm,
    /// CommonJS
    Cjs,
}

/// Configuration for bundling the CLI entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    /// Entry point compiled into the bundle
    pub entry_point: String,

    /// Output file for the bundle
    pub out_file: String,

    /// Target platform
    pub platform: BundlePlatform,

    /// Minimum runtime version (e.g., "node18")
    pub target: String,

    /// Output module format
    pub format: ModuleFormat,

    /// Module patterns left unbundled (e.g., "node:*" built-ins)
    #[serde(default)]
    pub external: Vec<String>,

    /// Emit a source map alongside the bundle
    #[serde(default = "default_sourcemap")]
    pub sourcemap: bool,
}

fn default_sourcemap() -> bool {
    true
}

impl BundleConfig {
    /// Create a bundle configuration for the CLI
    ///
    /// Defaults match the production build: Node platform, `node18` target,
    /// ESM output, Node built-ins external, source map enabled.
    pub fn new(entry_point: impl Into<String>, out_file: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            out_file: out_file.into(),
            platform: BundlePlatform::Node,
            target: "node18".to_string(),
            format: ModuleFormat::Esm,
            external: vec!["node:*".to_string()],
            sourcemap: true,
        }
    }

    /// Set the target platform
    pub fn with_platform(mut self, platform: BundlePlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the minimum runtime version
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the output module format
    pub fn with_format(mut self, format: ModuleFormat) -> Self {
        self.format = format;
        self
    }

    /// Add a module pattern to leave unbundled
    pub fn with_external(mut self, pattern: impl Into<String>) -> Self {
        self.external.push(pattern.into());
        self
    }

    /// Enable or disable source-map output
    pub fn with_sourcemap(mut self, enabled: bool) -> Self {
        self.sourcemap = enabled;
        self
    }
}
