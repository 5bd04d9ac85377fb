use super::DelugeSettings;

/// Programmed defaults, the lowest-precedence configuration layer.
pub fn default_settings() -> DelugeSettings {
    DelugeSettings {
        snippets: Some(true),
        hover: Some(true),
        generic_completions: Some(true),
    }
}
