//! Client notification abstraction for LSP communication.
//!
//! `ClientNotifier` wraps `tower_lsp_server::Client` and centralizes
//! client-facing logging, including forwarding settings events.
//!
//! Capability-dependent behaviour reads the `ClientCapabilities` stored in an
//! `OnceLock` during `initialize()`. Before that, every capability reads as
//! unsupported.

use std::sync::OnceLock;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::{ClientCapabilities, MessageType};

use crate::lsp::{SettingsEvent, SettingsEventKind};

/// Check if client capabilities indicate snippet support in completion items.
///
/// Returns `false` for any missing/null capability in the chain.
pub(crate) fn check_snippet_support(caps: &ClientCapabilities) -> bool {
    caps.text_document
        .as_ref()
        .and_then(|td| td.completion.as_ref())
        .and_then(|completion| completion.completion_item.as_ref())
        .and_then(|item| item.snippet_support)
        .unwrap_or(false)
}

/// Wrapper around LSP client for centralized notification handling.
#[derive(Clone)]
pub(crate) struct ClientNotifier<'a> {
    client: Client,
    /// Reference to capabilities stored in DelugeLs.
    client_capabilities: &'a OnceLock<ClientCapabilities>,
}

impl std::fmt::Debug for ClientNotifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientNotifier")
            .field("client", &self.client)
            .field("client_capabilities", &"&OnceLock<ClientCapabilities>")
            .finish()
    }
}

impl<'a> ClientNotifier<'a> {
    pub(crate) fn new(
        client: Client,
        client_capabilities: &'a OnceLock<ClientCapabilities>,
    ) -> Self {
        Self {
            client,
            client_capabilities,
        }
    }

    /// Log a message to the client at the specified severity level.
    pub(crate) async fn log(&self, level: MessageType, message: impl Into<String>) {
        self.client.log_message(level, message.into()).await;
    }

    /// Log an informational message.
    pub(crate) async fn log_info(&self, message: impl Into<String>) {
        self.log(MessageType::INFO, message).await;
    }

    /// Log a warning message.
    pub(crate) async fn log_warning(&self, message: impl Into<String>) {
        self.log(MessageType::WARNING, message).await;
    }

    /// Log a debug/trace message (LOG level in LSP).
    pub(crate) async fn log_trace(&self, message: impl Into<String>) {
        self.log(MessageType::LOG, message).await;
    }

    /// Forward settings load events to the client log.
    pub(crate) async fn log_settings_events(&self, events: &[SettingsEvent]) {
        for event in events {
            match event.kind {
                SettingsEventKind::Info => self.log_info(event.message.as_str()).await,
                SettingsEventKind::Warning => {
                    log::warn!(target: "deluge_ls::settings", "{}", event.message);
                    self.log_warning(event.message.as_str()).await
                }
            }
        }
    }

    /// Returns true only if the client declared completion snippet support.
    /// Returns false if initialize() hasn't been called yet (OnceLock is empty).
    pub(crate) fn supports_snippets(&self) -> bool {
        self.client_capabilities
            .get()
            .is_some_and(check_snippet_support)
    }
}
