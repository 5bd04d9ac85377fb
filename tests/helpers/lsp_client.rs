//! LSP client for E2E tests.
//!
//! Provides a simple LSP client that communicates with the deluge-ls binary
//! via stdin/stdout using JSON-RPC 2.0 protocol.

// Shared across several test binaries; not every binary uses every method.
#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

/// LSP client for communicating with the deluge-ls binary.
///
/// Handles JSON-RPC 2.0 message framing with Content-Length headers,
/// request/response matching, and server-initiated notifications.
pub struct LspClient {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    request_id: i64,
    notifications: Vec<Value>,
    _config_home: Option<tempfile::TempDir>,
}

impl LspClient {
    /// Spawn deluge-ls with an empty user config directory.
    ///
    /// The server reads `$XDG_CONFIG_HOME/deluge-ls/deluge-ls.toml`, so every
    /// client points it at a fresh directory to keep the developer's own
    /// settings out of the tests.
    pub fn new() -> Self {
        let config_home = tempfile::tempdir().expect("Failed to create config home");
        let mut client = Self::with_config_home(config_home.path());
        client._config_home = Some(config_home);
        client
    }

    /// Spawn deluge-ls with `XDG_CONFIG_HOME` pointing at `config_home`.
    pub fn with_config_home(config_home: &Path) -> Self {
        // `CARGO_BIN_EXE_deluge-ls` is set by Cargo's test harness for integration tests
        // and points to the built `deluge-ls` binary.
        let mut child = Command::new(env!("CARGO_BIN_EXE_deluge-ls"))
            .env("XDG_CONFIG_HOME", config_home)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn deluge-ls binary");

        let stdin = child.stdin.take().expect("Failed to get stdin");
        let stdout = BufReader::new(child.stdout.take().expect("Failed to get stdout"));

        Self {
            child,
            stdin: Some(stdin),
            stdout,
            request_id: 0,
            notifications: Vec::new(),
            _config_home: None,
        }
    }

    /// Send an LSP request and return the response.
    pub fn send_request(&mut self, method: &str, params: Value) -> Value {
        self.request_id += 1;
        let request_id = self.request_id;

        // Build request - some methods like "shutdown" don't take params
        let mut request = serde_json::Map::new();
        request.insert("jsonrpc".to_string(), json!("2.0"));
        request.insert("id".to_string(), json!(request_id));
        request.insert("method".to_string(), json!(method));

        if !params.is_null() {
            request.insert("params".to_string(), params);
        }

        self.send_message(&Value::Object(request));
        self.receive_response_for_id(request_id)
    }

    /// Send an LSP notification (no response expected).
    pub fn send_notification(&mut self, method: &str, params: Value) {
        let mut notification = serde_json::Map::new();
        notification.insert("jsonrpc".to_string(), json!("2.0"));
        notification.insert("method".to_string(), json!(method));

        if !params.is_null() {
            notification.insert("params".to_string(), params);
        }

        self.send_message(&Value::Object(notification));
    }

    /// Server notifications seen so far while waiting for responses.
    pub fn notifications(&self) -> &[Value] {
        &self.notifications
    }

    /// `window/logMessage` texts seen so far.
    pub fn log_messages(&self) -> Vec<String> {
        self.notifications
            .iter()
            .filter(|n| n["method"] == "window/logMessage")
            .filter_map(|n| n["params"]["message"].as_str().map(str::to_string))
            .collect()
    }

    fn send_message(&mut self, message: &Value) {
        let body = serde_json::to_string(message).expect("Failed to serialize message");
        let header = format!("Content-Length: {}\r\n\r\n", body.len());

        let stdin = self.stdin.as_mut().expect("stdin already closed");
        stdin
            .write_all(header.as_bytes())
            .expect("Failed to write header");
        stdin
            .write_all(body.as_bytes())
            .expect("Failed to write body");
        stdin.flush().expect("Failed to flush stdin");
    }

    /// Receive the response for `expected_id`, recording notifications on the way.
    /// Times out after 30 seconds or 1000 messages to prevent indefinite hangs.
    fn receive_response_for_id(&mut self, expected_id: i64) -> Value {
        const MAX_MESSAGES: u32 = 1000;
        const TIMEOUT: Duration = Duration::from_secs(30);

        let start_time = Instant::now();
        let mut message_count = 0u32;

        loop {
            if start_time.elapsed() > TIMEOUT {
                panic!(
                    "Timeout waiting for response with id {}. Elapsed: {:?}",
                    expected_id,
                    start_time.elapsed()
                );
            }

            if message_count >= MAX_MESSAGES {
                panic!(
                    "Exceeded maximum message threshold ({}) waiting for response with id {}",
                    MAX_MESSAGES, expected_id
                );
            }

            let message = self.receive_message();
            message_count += 1;

            if message.get("method").is_some() {
                // Notification or server-to-client request
                self.notifications.push(message);
                continue;
            }

            if message.get("id").and_then(Value::as_i64) == Some(expected_id) {
                return message;
            }
        }
    }

    /// Receive a single LSP message with Content-Length framing.
    fn receive_message(&mut self) -> Value {
        const MAX_HEADERS: u32 = 100;

        let mut header_count = 0u32;
        let mut header = String::new();
        loop {
            if header_count >= MAX_HEADERS {
                panic!(
                    "Exceeded maximum header count ({}) - server may be sending malformed headers",
                    MAX_HEADERS
                );
            }

            header.clear();
            let bytes_read = self
                .stdout
                .read_line(&mut header)
                .expect("Failed to read header line");

            if bytes_read == 0 {
                panic!("Server closed connection prematurely while reading header");
            }

            header_count += 1;

            if header == "\r\n" {
                continue;
            }

            if header.starts_with("Content-Length:") {
                let len: usize = header
                    .trim_start_matches("Content-Length:")
                    .trim()
                    .parse()
                    .expect("Invalid Content-Length value");

                let mut empty = String::new();
                self.stdout
                    .read_line(&mut empty)
                    .expect("Failed to read empty line");

                let mut body = vec![0u8; len];
                std::io::Read::read_exact(&mut self.stdout, &mut body)
                    .expect("Failed to read body");

                return serde_json::from_slice(&body).expect("Failed to parse response");
            }
        }
    }

    /// Close stdin to signal EOF.
    pub fn close_stdin(&mut self) {
        self.stdin = None;
    }

    /// Wait for the process to exit with a timeout.
    pub fn wait_for_exit(&mut self, timeout: Duration) -> Option<std::process::ExitStatus> {
        let start = Instant::now();
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => return Some(status),
                Ok(None) => {
                    if start.elapsed() > timeout {
                        return None;
                    }
                    std::thread::sleep(Duration::from_millis(50));
                }
                Err(_) => return None,
            }
        }
    }

    fn kill(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

impl Drop for LspClient {
    fn drop(&mut self) {
        self.kill();
    }
}
