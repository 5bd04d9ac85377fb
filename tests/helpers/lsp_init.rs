//! Session setup shared by the E2E tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::time::Duration;

use super::lsp_client::LspClient;

/// Document URI used by most tests.
pub const SCRIPT_URI: &str = "file:///tmp/deluge-ls-e2e/script.dg";

/// Client capabilities with or without completion snippet support.
pub fn client_capabilities(snippets: bool) -> Value {
    json!({
        "textDocument": {
            "completion": {
                "completionItem": { "snippetSupport": snippets }
            },
            "hover": { "contentFormat": ["markdown", "plaintext"] }
        }
    })
}

/// Run the initialize handshake and return the `initialize` result.
pub fn initialize(
    client: &mut LspClient,
    root_uri: Option<&str>,
    initialization_options: Option<Value>,
) -> Value {
    let mut params = json!({
        "processId": std::process::id(),
        "rootUri": root_uri,
        "capabilities": client_capabilities(true),
    });
    if let Some(options) = initialization_options {
        params["initializationOptions"] = options;
    }

    let response = client.send_request("initialize", params);
    client.send_notification("initialized", json!({}));
    response
        .get("result")
        .cloned()
        .unwrap_or_else(|| panic!("initialize failed: {:?}", response))
}

/// Spawn a server, initialize it without a root and open `text` at [`SCRIPT_URI`].
pub fn session_with_document(text: &str) -> LspClient {
    let mut client = LspClient::new();
    initialize(&mut client, None, None);
    open_document(&mut client, SCRIPT_URI, text);
    client
}

/// Notifications are dispatched concurrently with later requests; give the
/// server a moment to apply them before the next request.
pub fn settle() {
    std::thread::sleep(Duration::from_millis(100));
}

pub fn open_document(client: &mut LspClient, uri: &str, text: &str) {
    client.send_notification(
        "textDocument/didOpen",
        json!({
            "textDocument": {
                "uri": uri,
                "languageId": "deluge",
                "version": 1,
                "text": text
            }
        }),
    );
    settle();
}

pub fn completion(client: &mut LspClient, uri: &str, line: u32, character: u32) -> Value {
    let response = client.send_request(
        "textDocument/completion",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": line, "character": character }
        }),
    );
    response
        .get("result")
        .cloned()
        .unwrap_or_else(|| panic!("completion failed: {:?}", response))
}

pub fn hover(client: &mut LspClient, uri: &str, line: u32, character: u32) -> Value {
    let response = client.send_request(
        "textDocument/hover",
        json!({
            "textDocument": { "uri": uri },
            "position": { "line": line, "character": character }
        }),
    );
    response
        .get("result")
        .cloned()
        .unwrap_or_else(|| panic!("hover failed: {:?}", response))
}

/// Labels of a completion result, in the order the server sent them.
pub fn labels(result: &Value) -> Vec<String> {
    let items = match result {
        Value::Array(items) => items.clone(),
        Value::Object(list) => list
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    items
        .iter()
        .filter_map(|item| item["label"].as_str().map(str::to_string))
        .collect()
}

pub fn shutdown(client: &mut LspClient) {
    let response = client.send_request("shutdown", Value::Null);
    assert!(
        response.get("error").is_none(),
        "shutdown failed: {:?}",
        response
    );
    client.send_notification("exit", Value::Null);
}
