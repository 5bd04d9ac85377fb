use tower_lsp_server::ls_types::{Hover, HoverContents, MarkupContent, MarkupKind, Range};

use crate::catalog::lookup_hover;

/// Hover for `word`, highlighting `range`, if the word is documented.
pub fn hover_for_word(word: &str, range: Range) -> Option<Hover> {
    let doc = lookup_hover(word)?;
    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: doc.to_string(),
        }),
        range: Some(range),
    })
}
