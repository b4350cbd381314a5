//! Policy gate implementation
//!
//! Every query is a pure, synchronous function of the environment source's
//! current state: nothing is cached between calls, there is no shared mutable
//! state, and no operation can fail or block. Concurrent callers need no
//! coordination.

use crate::core::PermissionMode;
use crate::env::{EnvSource, ProcessEnv};

/// Environment key controlling whether `bypassPermissions` is exposed
pub const BYPASS_MODE_KEY: &str = "ENABLE_BYPASS_MODE";

/// Modes that are always available, in UI presentation order
const BASE_MODES: [PermissionMode; 3] = [
    PermissionMode::Default,
    PermissionMode::Plan,
    PermissionMode::AcceptEdits,
];

/// Gate deciding which permission modes are available for selection
///
/// Holds an injected [`EnvSource`] rather than reading process globals, so the
/// dependency on environment state is explicit and testable.
#[derive(Debug, Clone)]
pub struct PermissionPolicy<E: EnvSource = ProcessEnv> {
    env: E,
}

impl PermissionPolicy<ProcessEnv> {
    /// Create a policy gate backed by the live process environment
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> PermissionPolicy<E> {
    /// Create a policy gate backed by the given environment source
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Whether the dangerous `bypassPermissions` mode is enabled
    ///
    /// True only when `ENABLE_BYPASS_MODE` holds exactly the string `"true"`.
    /// The match is case-sensitive and total: `"TRUE"`, `"1"`, `"yes"`, and an
    /// absent key all disable the mode. Loosely-typed or partially-set values
    /// must never enable it.
    pub fn bypass_enabled(&self) -> bool {
        self.env.var(BYPASS_MODE_KEY).as_deref() == Some("true")
    }

    /// All currently available modes, in UI presentation order
    ///
    /// Returns a fresh vector on every call; callers may mutate their copy
    /// without affecting later queries. `bypassPermissions` is appended last,
    /// and only when [`bypass_enabled`](Self::bypass_enabled) is true.
    pub fn available_modes(&self) -> Vec<PermissionMode> {
        let mut modes = BASE_MODES.to_vec();
        if self.bypass_enabled() {
            modes.push(PermissionMode::BypassPermissions);
        }
        modes
    }

    /// Whether `candidate` names a mode available right now
    ///
    /// The candidate is an opaque string: no trimming or case-folding is
    /// applied, so an unrecognized or wrongly-cased name returns false.
    /// Evaluated against the environment source at call time, not cached.
    pub fn is_mode_available(&self, candidate: &str) -> bool {
        match PermissionMode::from_name(candidate) {
            Some(mode) => self.available_modes().contains(&mode),
            None => false,
        }
    }
}

impl Default for PermissionPolicy<ProcessEnv> {
    fn default() -> Self {
        Self::from_process_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    fn policy_with(value: Option<&str>) -> PermissionPolicy<StaticEnv> {
        let env = match value {
            Some(v) => StaticEnv::new().with_var(BYPASS_MODE_KEY, v),
            None => StaticEnv::new(),
        };
        PermissionPolicy::new(env)
    }

    #[test]
    fn test_bypass_disabled_when_key_absent() {
        let policy = policy_with(None);

        assert!(!policy.bypass_enabled());
        assert_eq!(
            policy.available_modes(),
            vec![
                PermissionMode::Default,
                PermissionMode::Plan,
                PermissionMode::AcceptEdits,
            ]
        );
    }

    #[test]
    fn test_bypass_enabled_on_exact_true() {
        let policy = policy_with(Some("true"));

        assert!(policy.bypass_enabled());
        assert_eq!(
            policy.available_modes(),
            vec![
                PermissionMode::Default,
                PermissionMode::Plan,
                PermissionMode::AcceptEdits,
                PermissionMode::BypassPermissions,
            ]
        );
    }

    #[test]
    fn test_bypass_match_is_case_sensitive() {
        for value in ["True", "TRUE", "1", "yes", "true ", " true", ""] {
            let policy = policy_with(Some(value));
            assert!(!policy.bypass_enabled(), "value {:?} must not enable bypass", value);
            assert_eq!(policy.available_modes().len(), 3);
        }
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let policy = policy_with(Some("true"));

        assert_eq!(policy.available_modes(), policy.available_modes());
        assert_eq!(policy.bypass_enabled(), policy.bypass_enabled());
    }

    #[test]
    fn test_caller_cannot_corrupt_later_queries() {
        let policy = policy_with(None);

        let mut modes = policy.available_modes();
        modes.clear();

        assert_eq!(policy.available_modes().len(), 3);
    }

    #[test]
    fn test_membership_matches_mode_list() {
        for value in [None, Some("true"), Some("false")] {
            let policy = policy_with(value);
            let available = policy.available_modes();

            for name in ["default", "plan", "acceptEdits", "bypassPermissions"] {
                let expected = available.iter().any(|m| m.as_str() == name);
                assert_eq!(policy.is_mode_available(name), expected);
            }
        }
    }

    #[test]
    fn test_unknown_modes_are_rejected() {
        for policy in [policy_with(None), policy_with(Some("true"))] {
            assert!(!policy.is_mode_available("superuser"));
            assert!(!policy.is_mode_available("BypassPermissions"));
            assert!(!policy.is_mode_available(" acceptEdits"));
            assert!(!policy.is_mode_available(""));
        }
    }

    #[test]
    fn test_scenario_key_unset() {
        let policy = policy_with(None);

        let names: Vec<&str> = policy.available_modes().iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["default", "plan", "acceptEdits"]);
        assert!(!policy.is_mode_available("bypassPermissions"));
    }

    #[test]
    fn test_scenario_key_true() {
        let policy = policy_with(Some("true"));

        let names: Vec<&str> = policy.available_modes().iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["default", "plan", "acceptEdits", "bypassPermissions"]);
        assert!(policy.is_mode_available("bypassPermissions"));
    }

    #[test]
    fn test_scenario_key_false_same_as_unset() {
        let unset = policy_with(None);
        let false_value = policy_with(Some("false"));

        assert_eq!(unset.available_modes(), false_value.available_modes());
        assert_eq!(
            unset.is_mode_available("bypassPermissions"),
            false_value.is_mode_available("bypassPermissions")
        );
    }
}
