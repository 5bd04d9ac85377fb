pub mod defaults;
pub mod settings;
pub mod user;

pub use settings::{DelugeSettings, WorkspaceSettings};
pub use user::{UserConfigError, UserConfigResult, load_user_config, user_config_path};

/// File name of both the user-wide and the project configuration file.
pub const CONFIG_FILE_NAME: &str = "deluge-ls.toml";

/// Merge all layers in order, later layers taking precedence.
pub fn merge_all(configs: &[Option<DelugeSettings>]) -> Option<DelugeSettings> {
    configs.iter().cloned().reduce(merge_settings).flatten()
}

/// Merge two DelugeSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<DelugeSettings>,
    primary: Option<DelugeSettings>,
) -> Option<DelugeSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(DelugeSettings {
            snippets: primary.snippets.or(fallback.snippets),
            hover: primary.hover.or(fallback.hover),
            generic_completions: primary
                .generic_completions
                .or(fallback.generic_completions),
        }),
    }
}
