//! Environment configuration sources
//!
//! The policy gate and the config loaders never read process globals directly.
//! They take an [`EnvSource`], which makes the dependency on environment state
//! explicit at every call site and lets tests supply values without touching
//! the real process environment.

use std::collections::HashMap;

/// A source of environment-style configuration values
///
/// A value is either a string or absent. No parsing, no transformation, no
/// errors: interpretation is entirely up to the consumer.
pub trait EnvSource {
    /// Look up the value bound to `key`
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment at call time (no caching)
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed in-memory environment
///
/// Used by tests, and by embedders that want to evaluate the policy against a
/// snapshot rather than live process state.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty environment (every key is absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to a value
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env_lookup() {
        let env = StaticEnv::new().with_var("PORT", "9000");

        assert_eq!(env.var("PORT"), Some("9000".to_string()));
        assert_eq!(env.var("FRONTEND_PORT"), None);
    }

    #[test]
    fn test_static_env_overwrites_on_rebind() {
        let env = StaticEnv::new()
            .with_var("PORT", "9000")
            .with_var("PORT", "9001");

        assert_eq!(env.var("PORT"), Some("9001".to_string()));
    }

    #[test]
    fn test_env_source_through_reference() {
        let env = StaticEnv::new().with_var("KEY", "value");
        let by_ref: &dyn EnvSource = &env;

        assert_eq!(by_ref.var("KEY"), Some("value".to_string()));
    }
}
