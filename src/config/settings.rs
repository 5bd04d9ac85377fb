use serde::{Deserialize, Serialize};

/// One configuration layer as written by the user.
///
/// Every field is optional so layers can be merged field by field; unset
/// fields fall through to lower-precedence layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DelugeSettings {
    /// Insert `name($1)` snippets for service methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets: Option<bool>,

    /// Answer `textDocument/hover`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<bool>,

    /// Offer keywords and built-in functions outside the `zoho.` namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_completions: Option<bool>,
}

/// Fully resolved settings used by request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceSettings {
    pub snippets: bool,
    pub hover: bool,
    pub generic_completions: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            snippets: true,
            hover: true,
            generic_completions: true,
        }
    }
}

impl From<DelugeSettings> for WorkspaceSettings {
    fn from(settings: DelugeSettings) -> Self {
        let defaults = WorkspaceSettings::default();
        Self {
            snippets: settings.snippets.unwrap_or(defaults.snippets),
            hover: settings.hover.unwrap_or(defaults.hover),
            generic_completions: settings
                .generic_completions
                .unwrap_or(defaults.generic_completions),
        }
    }
}
