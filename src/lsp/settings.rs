use crate::config::{
    CONFIG_FILE_NAME, DelugeSettings, WorkspaceSettings, defaults::default_settings,
    load_user_config, merge_all,
};
use crate::error::{LspError, LspResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsEventKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub kind: SettingsEventKind,
    pub message: String,
}

impl SettingsEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Warning,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSource {
    InitializationOptions,
    ClientConfiguration,
}

impl SettingsSource {
    fn description(self) -> &'static str {
        match self {
            SettingsSource::InitializationOptions => "initialization options",
            SettingsSource::ClientConfiguration => "client configuration",
        }
    }
}

#[derive(Default, Debug)]
pub struct SettingsLoadOutcome {
    pub settings: WorkspaceSettings,
    pub events: Vec<SettingsEvent>,
}

/// Resolve settings from every layer: defaults < user < project < override.
///
/// Problems in any layer are reported as warning events and the layer is
/// skipped; loading itself never fails.
pub fn load_settings(
    root_path: Option<&Path>,
    override_settings: Option<(SettingsSource, Value)>,
) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    let defaults = Some(default_settings());

    let user_config = match load_user_config() {
        Ok(Some(settings)) => {
            events.push(SettingsEvent::info(
                "Loaded user config from XDG_CONFIG_HOME",
            ));
            Some(settings)
        }
        Ok(None) => None,
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to load user config: {}",
                err
            )));
            None
        }
    };

    let project_settings = root_path.and_then(|root| {
        match load_project_settings(root) {
            Ok(Some(settings)) => {
                events.push(SettingsEvent::info(format!(
                    "Loaded {}",
                    root.join(CONFIG_FILE_NAME).display()
                )));
                Some(settings)
            }
            Ok(None) => None,
            Err(err) => {
                events.push(SettingsEvent::warning(err.to_string()));
                None
            }
        }
    });

    let override_settings = override_settings
        .and_then(|(source, value)| parse_override_settings(source, value, &mut events));

    let merged = merge_all(&[defaults, user_config, project_settings, override_settings]);
    let settings = merged.map(WorkspaceSettings::from).unwrap_or_default();

    SettingsLoadOutcome { settings, events }
}

fn load_project_settings(root: &Path) -> LspResult<Option<DelugeSettings>> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)?;
    toml::from_str::<DelugeSettings>(&contents)
        .map(Some)
        .map_err(|err| {
            LspError::config(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                err
            ))
        })
}

fn parse_override_settings(
    source: SettingsSource,
    value: Value,
    events: &mut Vec<SettingsEvent>,
) -> Option<DelugeSettings> {
    // Clients commonly send `null` or nest our section under its name.
    let value = match value {
        Value::Null => return None,
        Value::Object(mut map) if map.contains_key("deluge") => map.remove("deluge")?,
        other => other,
    };

    match serde_json::from_value::<DelugeSettings>(value) {
        Ok(settings) => {
            events.push(SettingsEvent::info(format!(
                "Parsed {} as deluge-ls settings",
                source.description()
            )));
            Some(settings)
        }
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to parse {}: {}",
                source.description(),
                err
            )));
            None
        }
    }
}
