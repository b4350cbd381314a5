//! Permission mode type
//!
//! Modes are an enumerated set, not free-form strings. Each mode has exactly
//! one external name (camelCase, matching what the frontend and CLI exchange),
//! and parsing is an exact match: an unrecognized or wrongly-cased name simply
//! does not parse.

use serde::{Deserialize, Serialize};

/// Autonomy level a user may select for the agent's file-editing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    /// Standard confirmation flow: every gated action asks the user
    Default,

    /// Agent proposes changes without applying them
    Plan,

    /// File edits are auto-applied, other actions still gated
    AcceptEdits,

    /// All gating disabled (maximal risk, hidden unless explicitly enabled)
    BypassPermissions,
}

impl PermissionMode {
    /// External name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionMode::Default => "default",
            PermissionMode::Plan => "plan",
            PermissionMode::AcceptEdits => "acceptEdits",
            PermissionMode::BypassPermissions => "bypassPermissions",
        }
    }

    /// Parse an external mode name
    ///
    /// Exact match only: no trimming, no case-folding. `"AcceptEdits"` and
    /// `"BYPASSPERMISSIONS"` return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(PermissionMode::Default),
            "plan" => Some(PermissionMode::Plan),
            "acceptEdits" => Some(PermissionMode::AcceptEdits),
            "bypassPermissions" => Some(PermissionMode::BypassPermissions),
            _ => None,
        }
    }
}

impl std::fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [
            PermissionMode::Default,
            PermissionMode::Plan,
            PermissionMode::AcceptEdits,
            PermissionMode::BypassPermissions,
        ] {
            assert_eq!(PermissionMode::from_name(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_from_name_is_exact_match() {
        assert_eq!(PermissionMode::from_name("Default"), None);
        assert_eq!(PermissionMode::from_name("acceptedits"), None);
        assert_eq!(PermissionMode::from_name(" plan"), None);
        assert_eq!(PermissionMode::from_name("superuser"), None);
        assert_eq!(PermissionMode::from_name(""), None);
    }

    #[test]
    fn test_serde_uses_external_names() {
        let json = serde_json::to_string(&PermissionMode::AcceptEdits).unwrap();
        assert_eq!(json, "\"acceptEdits\"");

        let mode: PermissionMode = serde_json::from_str("\"bypassPermissions\"").unwrap();
        assert_eq!(mode, PermissionMode::BypassPermissions);
    }

    #[test]
    fn test_display_matches_external_name() {
        assert_eq!(PermissionMode::Plan.to_string(), "plan");
        assert_eq!(
            PermissionMode::BypassPermissions.to_string(),
            "bypassPermissions"
        );
    }
}
