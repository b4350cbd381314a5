//! Dev-server configuration
//!
//! Mirrors the frontend dev server's wiring: host/port for the frontend
//! itself, a proxy forwarding `/api` to the backend process, and the test
//! runner's environment and exclusion globs.

use serde::{Deserialize, Serialize};

use crate::core::{ModePolicyError, ModePolicyResult};
use crate::env::EnvSource;

/// Environment key for the backend API port
pub const API_PORT_KEY: &str = "PORT";

/// Environment key for the frontend dev-server port
pub const FRONTEND_PORT_KEY: &str = "FRONTEND_PORT";

/// Environment key for the frontend dev-server host
pub const FRONTEND_HOST_KEY: &str = "FRONTEND_HOST";

const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_FRONTEND_PORT: u16 = 3000;
const DEFAULT_FRONTEND_HOST: &str = "127.0.0.1";

/// Proxy rule forwarding a path prefix to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Path prefix to forward (e.g., "/api")
    pub path_prefix: String,

    /// Backend target URL (e.g., "http://localhost:8080")
    pub target: String,

    /// Rewrite the Host header to the target
    #[serde(default = "default_true")]
    pub change_origin: bool,

    /// Verify the target's TLS certificate
    #[serde(default)]
    pub secure: bool,
}

fn default_true() -> bool {
    true
}

/// Dev-server configuration for the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Host the frontend binds to
    pub host: String,

    /// Port the frontend binds to
    pub port: u16,

    /// API proxy rule
    pub proxy: ProxyConfig,
}

impl DevServerConfig {
    /// Load the configuration from an environment source
    ///
    /// Missing keys fall back to defaults (`127.0.0.1:3000` frontend,
    /// backend on `8080`). A port value that is present but not a valid port
    /// number is a configuration error, not a silent fallback.
    pub fn from_env(env: &impl EnvSource) -> ModePolicyResult<Self> {
        let api_port = read_port(env, API_PORT_KEY, DEFAULT_API_PORT)?;
        let port = read_port(env, FRONTEND_PORT_KEY, DEFAULT_FRONTEND_PORT)?;
        let host = env
            .var(FRONTEND_HOST_KEY)
            .unwrap_or_else(|| DEFAULT_FRONTEND_HOST.to_string());

        let config = Self {
            host,
            port,
            proxy: ProxyConfig {
                path_prefix: "/api".to_string(),
                target: format!("http://localhost:{}", api_port),
                change_origin: true,
                secure: false,
            },
        };
        tracing::info!(
            "Dev server configured on {}:{} (proxying {} to {})",
            config.host,
            config.port,
            config.proxy.path_prefix,
            config.proxy.target
        );
        Ok(config)
    }
}

fn read_port(env: &impl EnvSource, key: &str, default: u16) -> ModePolicyResult<u16> {
    match env.var(key) {
        Some(value) => value.parse().map_err(|_| {
            ModePolicyError::invalid_config(format!("{} is not a port number: {:?}", key, value))
        }),
        None => Ok(default),
    }
}

/// Test-runner wiring for the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunnerConfig {
    /// DOM environment the tests run in
    pub environment: String,

    /// Files executed before the test suite
    pub setup_files: Vec<String>,

    /// Globs excluded from test discovery
    pub exclude: Vec<String>,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        Self {
            environment: "jsdom".to_string(),
            setup_files: vec!["./src/test-setup.ts".to_string()],
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
                "**/cypress/**".to_string(),
                "**/.{idea,git,cache,output,temp}/**".to_string(),
                "**/{karma,rollup,webpack,vite,vitest,jest,ava,babel,nyc,cypress,tsup,build}.config.*"
                    .to_string(),
                "**/scripts/**".to_string(),
                "**/tests/**".to_string(),
            ],
        }
    }
}
