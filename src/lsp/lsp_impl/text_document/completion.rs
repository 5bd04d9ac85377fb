//! Completion method for DelugeLs.

use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::{CompletionParams, CompletionResponse};

use super::super::DelugeLs;
use crate::analysis::completion_items;

impl DelugeLs {
    pub(crate) async fn completion_impl(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let lsp_uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        // Unknown documents get no completions rather than an error
        let line_prefix = match self.line_prefix(&lsp_uri, position) {
            Ok(prefix) => prefix,
            Err(err) => {
                self.notifier().log_trace(err.to_string()).await;
                return Ok(None);
            }
        };

        let options = self.completion_options();
        let items = completion_items(&line_prefix, options);
        log::debug!(
            target: "deluge_ls::completion",
            "{:?} at {}:{} -> {} items",
            line_prefix,
            position.line,
            position.character,
            items.as_ref().map_or(0, Vec::len)
        );

        Ok(items.map(CompletionResponse::Array))
    }
}
