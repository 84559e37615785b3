// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host adapter: JSON-RPC over a single argument or stdio.
//!
//! Launcher hosts invoke the plugin with one JSON-RPC request of the
//! form `{"method": "query"|"open_path", "parameters": [..]}` and read
//! `{"result": [items]}` from stdout. With no argument the adapter
//! serves newline-delimited requests from stdin, which is also how the
//! integration tests drive it.

use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, error};

use crate::fsio::{self, OsFileSystem};
use crate::query;
use crate::settings::SettingsStore;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    method: String,
    #[serde(default)]
    parameters: Vec<Value>,
}

pub fn run(request: Option<&str>, settings_path: &Path) -> io::Result<()> {
    let mut store = SettingsStore::load(settings_path);
    let fs = OsFileSystem;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if let Some(raw) = request {
        let resp = handle_raw(raw, &mut store, &fs);
        return write_response(&mut stdout, &resp);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let resp = handle_raw(&line, &mut store, &fs);
        write_response(&mut stdout, &resp)?;
    }

    Ok(())
}

fn handle_raw(raw: &str, store: &mut SettingsStore, fs: &OsFileSystem) -> Value {
    let req = match serde_json::from_str::<RpcRequest>(raw) {
        Ok(req) => req,
        Err(err) => {
            return json!({ "error": { "message": format!("parse error: {err}") } });
        }
    };
    handle_request(&req, store, fs)
}

fn handle_request(req: &RpcRequest, store: &mut SettingsStore, fs: &OsFileSystem) -> Value {
    debug!(method = %req.method, "handling host request");
    match req.method.as_str() {
        "query" => {
            let raw_query = req
                .parameters
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default();
            let items = query::resolve(raw_query, store, fs);
            json!({ "result": items })
        }
        "open_path" => match req.parameters.first().and_then(Value::as_str) {
            Some(path) => match fsio::open_path(Path::new(path)) {
                Ok(()) => json!({ "result": [] }),
                // Already logged at the fsio seam; re-signal to the host.
                Err(err) => json!({ "error": { "message": err.to_string() } }),
            },
            None => json!({ "error": { "message": "missing required parameter: path" } }),
        },
        other => {
            error!(method = other, "unknown host method");
            json!({ "error": { "message": format!("method not found: {other}") } })
        }
    }
}

fn write_response(w: &mut impl Write, resp: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *w, resp)?;
    w.write_all(b"\n")?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn query_request_wraps_items_in_result() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = SettingsStore::load(&dir.path().join("settings.json"));

        let resp = handle_raw(
            r#"{"method": "query", "parameters": [""]}"#,
            &mut store,
            &OsFileSystem,
        );
        let items = resp["result"].as_array().expect("result array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["Title"], "No keywords set");
    }

    #[test]
    fn missing_parameters_default_to_blank_query() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = SettingsStore::load(&dir.path().join("settings.json"));

        let resp = handle_raw(r#"{"method": "query"}"#, &mut store, &OsFileSystem);
        assert!(resp["result"].is_array());
    }

    #[test]
    fn unknown_method_and_bad_json_report_errors() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = SettingsStore::load(&dir.path().join("settings.json"));

        let resp = handle_raw(r#"{"method": "reload"}"#, &mut store, &OsFileSystem);
        assert!(resp["error"]["message"]
            .as_str()
            .expect("message")
            .contains("method not found"));

        let resp = handle_raw("{oops", &mut store, &OsFileSystem);
        assert!(resp["error"]["message"]
            .as_str()
            .expect("message")
            .contains("parse error"));
    }
}
