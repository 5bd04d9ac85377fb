//! Completion item construction.
//!
//! Turns a resolved [`TriggerContext`] into LSP completion items. Items carry
//! a zero-padded `sortText` so clients keep the authored order instead of
//! sorting alphabetically.

use tower_lsp_server::ls_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
};

use crate::catalog::{
    GenericKind, MethodDescriptor, Service, list_generic_keywords_and_functions, list_services,
    methods,
};
use crate::context::{TriggerContext, resolve_context};

/// Per-request switches derived from settings and client capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Emit `name($1)` snippets; plain `name()` otherwise.
    pub snippets: bool,
    /// Offer keywords and functions in the generic context.
    pub generic_completions: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            snippets: true,
            generic_completions: true,
        }
    }
}

/// Completion items for the text left of the cursor.
///
/// Returns `None` only when the generic context is disabled; an uncovered
/// service yields `Some` of an empty list.
pub fn completion_items(line_prefix: &str, options: CompletionOptions) -> Option<Vec<CompletionItem>> {
    match resolve_context(line_prefix) {
        TriggerContext::NamespaceRoot => Some(service_items()),
        TriggerContext::ServiceScoped { service } => Some(method_items(service, options.snippets)),
        TriggerContext::Generic if options.generic_completions => Some(generic_items()),
        TriggerContext::Generic => None,
    }
}

fn service_items() -> Vec<CompletionItem> {
    list_services()
        .iter()
        .enumerate()
        .map(|(rank, descriptor)| CompletionItem {
            label: descriptor.identifier().to_string(),
            kind: Some(CompletionItemKind::MODULE),
            detail: Some(descriptor.display_label.to_string()),
            sort_text: Some(sort_text(rank)),
            ..Default::default()
        })
        .collect()
}

fn method_items(service: Service, snippets: bool) -> Vec<CompletionItem> {
    methods(service)
        .iter()
        .enumerate()
        .map(|(rank, method)| method_item(service, method, rank, snippets))
        .collect()
}

fn method_item(
    service: Service,
    method: &MethodDescriptor,
    rank: usize,
    snippets: bool,
) -> CompletionItem {
    let (insert_text, insert_text_format) = if snippets {
        (format!("{}($1)", method.name), InsertTextFormat::SNIPPET)
    } else {
        (format!("{}()", method.name), InsertTextFormat::PLAIN_TEXT)
    };

    CompletionItem {
        label: method.name.to_string(),
        kind: Some(CompletionItemKind::METHOD),
        detail: Some(method_detail(method)),
        documentation: Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: method_documentation(service, method),
        })),
        insert_text: Some(insert_text),
        insert_text_format: Some(insert_text_format),
        sort_text: Some(sort_text(rank)),
        ..Default::default()
    }
}

/// `"{returns} {name}{params}"`, e.g. `Map getRecords(module_name, ...)`.
pub fn method_detail(method: &MethodDescriptor) -> String {
    format!(
        "{} {}{}",
        method.return_type_label, method.name, method.parameter_signature
    )
}

/// Markdown shown beside a method completion.
pub fn method_documentation(service: Service, method: &MethodDescriptor) -> String {
    format!(
        "**{name}**\n\n{description}\n\n**Returns:** `{returns}`\n\n**Usage:** `zoho.{service}.{name}{params}`",
        name = method.name,
        description = method.description,
        returns = method.return_type_label,
        service = service.as_str(),
        params = method.parameter_signature,
    )
}

fn generic_items() -> Vec<CompletionItem> {
    list_generic_keywords_and_functions()
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| CompletionItem {
            label: entry.name.to_string(),
            kind: Some(match entry.kind {
                GenericKind::Keyword => CompletionItemKind::KEYWORD,
                GenericKind::Function => CompletionItemKind::FUNCTION,
            }),
            sort_text: Some(sort_text(rank)),
            ..Default::default()
        })
        .collect()
}

fn sort_text(rank: usize) -> String {
    format!("{rank:04}")
}
