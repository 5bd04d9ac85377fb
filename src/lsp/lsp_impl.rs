use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;
use tower_lsp_server::{Client, LanguageServer};
use url::Url;

use crate::analysis;
use crate::config::WorkspaceSettings;
use crate::document::{Document, DocumentStore};
use crate::error::{LspError, LspResult};

use super::client::ClientNotifier;
use super::settings::{SettingsLoadOutcome, SettingsSource, load_settings};
use super::text_sync::apply_content_changes;

mod text_document;

pub const SERVER_NAME: &str = "deluge-ls";

pub struct DelugeLs {
    client: Client,
    documents: DocumentStore,
    settings: ArcSwap<WorkspaceSettings>,
    root_path: OnceLock<PathBuf>,
    client_capabilities: OnceLock<ClientCapabilities>,
}

impl std::fmt::Debug for DelugeLs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelugeLs")
            .field("client", &self.client)
            .field("documents", &self.documents.len())
            .field("settings", &self.settings.load())
            .finish_non_exhaustive()
    }
}

/// Convert a protocol URI into the `Url` used as document key.
pub(crate) fn uri_to_url(uri: &Uri) -> LspResult<Url> {
    Url::parse(uri.as_str()).map_err(|_| LspError::invalid_uri(uri.as_str()))
}

fn workspace_root(params: &InitializeParams) -> Option<(PathBuf, &'static str)> {
    if let Some(folder) = params.workspace_folders.as_ref().and_then(|f| f.first()) {
        let path = uri_to_url(&folder.uri).ok()?.to_file_path().ok()?;
        return Some((path, "workspace folders"));
    }

    #[allow(deprecated)] // Support for older LSP clients
    let root_uri = params.root_uri.as_ref();
    if let Some(root_uri) = root_uri {
        let path = uri_to_url(root_uri).ok()?.to_file_path().ok()?;
        return Some((path, "root_uri"));
    }

    None
}

impl DelugeLs {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            settings: ArcSwap::from_pointee(WorkspaceSettings::default()),
            root_path: OnceLock::new(),
            client_capabilities: OnceLock::new(),
        }
    }

    fn notifier(&self) -> ClientNotifier<'_> {
        ClientNotifier::new(self.client.clone(), &self.client_capabilities)
    }

    fn settings(&self) -> WorkspaceSettings {
        **self.settings.load()
    }

    async fn apply_settings(&self, outcome: SettingsLoadOutcome) {
        log::debug!(
            target: "deluge_ls::settings",
            "Applying settings: {:?}",
            outcome.settings
        );
        self.settings.store(Arc::new(outcome.settings));
        self.notifier().log_settings_events(&outcome.events).await;
    }

    fn completion_options(&self) -> analysis::CompletionOptions {
        let settings = self.settings();
        analysis::CompletionOptions {
            snippets: settings.snippets && self.notifier().supports_snippets(),
            generic_completions: settings.generic_completions,
        }
    }

    /// Text of the cursor's line up to the cursor.
    fn line_prefix(&self, uri: &Uri, position: Position) -> LspResult<String> {
        let url = uri_to_url(uri)?;
        let doc = self
            .documents
            .get(&url)
            .ok_or_else(|| LspError::document_not_found(uri.as_str()))?;
        let prefix = doc.position_mapper().line_prefix(position).unwrap_or("");
        Ok(prefix.to_string())
    }

    /// The identifier under the cursor and its range.
    fn word_at(&self, uri: &Uri, position: Position) -> LspResult<Option<(String, Range)>> {
        let url = uri_to_url(uri)?;
        let doc = self
            .documents
            .get(&url)
            .ok_or_else(|| LspError::document_not_found(uri.as_str()))?;
        Ok(doc
            .position_mapper()
            .word_at(position)
            .map(|(word, range)| (word.to_string(), range)))
    }
}

impl LanguageServer for DelugeLs {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let _ = self.client_capabilities.set(params.capabilities.clone());
        let notifier = self.notifier();

        match workspace_root(&params) {
            Some((path, source)) => {
                notifier
                    .log_info(format!(
                        "Using workspace root from {}: {}",
                        source,
                        path.display()
                    ))
                    .await;
                let _ = self.root_path.set(path);
            }
            None => {
                notifier
                    .log_info("No workspace root - project config will not be loaded")
                    .await;
            }
        }

        let override_settings = params
            .initialization_options
            .map(|options| (SettingsSource::InitializationOptions, options));
        let outcome = load_settings(self.root_path.get().map(PathBuf::as_path), override_settings);
        self.apply_settings(outcome).await;

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::INCREMENTAL),
                        ..Default::default()
                    },
                )),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                ..ServerCapabilities::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.notifier().log_info("server is ready").await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let url = match uri_to_url(&doc.uri) {
            Ok(url) => url,
            Err(err) => {
                log::warn!(target: "deluge_ls::documents", "{}", err);
                return;
            }
        };

        log::debug!(
            target: "deluge_ls::documents",
            "didOpen {} ({}, v{})",
            url,
            doc.language_id,
            doc.version
        );
        self.documents
            .insert(url, Document::opened(doc.text, doc.language_id, doc.version));
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let url = match uri_to_url(&params.text_document.uri) {
            Ok(url) => url,
            Err(err) => {
                log::warn!(target: "deluge_ls::documents", "{}", err);
                return;
            }
        };

        let Some(old_text) = self.documents.get_document_text(&url) else {
            self.notifier()
                .log_warning(format!("Document not found for change event: {}", url))
                .await;
            return;
        };

        let text = apply_content_changes(&old_text, params.content_changes);
        self.documents
            .update_document(url, text, Some(params.text_document.version));
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        if let Ok(url) = uri_to_url(&params.text_document.uri) {
            self.documents.remove(&url);
        }
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        let outcome = load_settings(
            self.root_path.get().map(PathBuf::as_path),
            Some((SettingsSource::ClientConfiguration, params.settings)),
        );
        self.apply_settings(outcome).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        self.completion_impl(params).await
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        self.hover_impl(params).await
    }
}
