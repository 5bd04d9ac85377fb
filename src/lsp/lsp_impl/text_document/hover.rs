//! Hover method for DelugeLs.

use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::{Hover, HoverParams};

use super::super::DelugeLs;
use crate::analysis::hover_for_word;

impl DelugeLs {
    pub(crate) async fn hover_impl(&self, params: HoverParams) -> Result<Option<Hover>> {
        if !self.settings().hover {
            return Ok(None);
        }

        let lsp_uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let (word, range) = match self.word_at(&lsp_uri, position) {
            Ok(Some(found)) => found,
            Ok(None) => return Ok(None),
            Err(err) => {
                self.notifier().log_trace(err.to_string()).await;
                return Ok(None);
            }
        };

        let hover = hover_for_word(&word, range);
        log::debug!(
            target: "deluge_ls::hover",
            "hover {:?} -> {}",
            word,
            if hover.is_some() { "documented" } else { "none" }
        );
        Ok(hover)
    }
}
