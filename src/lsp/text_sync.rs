//! Text synchronization utilities for LSP didChange handling.
//!
//! The LSP protocol supports two text synchronization modes:
//! - **Incremental**: Client sends only the changed ranges
//! - **Full**: Client sends the entire document content
//!
//! Both may appear in a single notification; changes apply in order.

use tower_lsp_server::ls_types::TextDocumentContentChangeEvent;

use crate::text::PositionMapper;

/// Apply content changes to text and return the updated document.
pub(crate) fn apply_content_changes(
    old_text: &str,
    content_changes: Vec<TextDocumentContentChangeEvent>,
) -> String {
    let mut text = old_text.to_string();

    for change in content_changes {
        match change.range {
            Some(range) => {
                let mapper = PositionMapper::new(&text);
                let start_offset = mapper.position_to_byte(range.start).unwrap_or(text.len());
                let end_offset = mapper
                    .position_to_byte(range.end)
                    .unwrap_or(text.len())
                    .max(start_offset);
                text.replace_range(start_offset..end_offset, &change.text);
            }
            None => text = change.text,
        }
    }

    text
}
