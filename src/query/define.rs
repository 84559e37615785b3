// SPDX-License-Identifier: MIT OR Apache-2.0

//! Definition queries: `keyword : path` parsing, validation, and
//! registration.

use std::path::Path;
use tracing::{debug, warn};

use crate::errors::ResolveError;
use crate::fsio::FileSystemProbe;
use crate::item::{Icon, ResultItem};
use crate::query::error_item;
use crate::settings::SettingsStore;

/// Parsed halves of a definition query.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Definition<'a> {
    pub keyword: &'a str,
    pub path: &'a str,
}

/// Split on the first `:`, trim both halves, and strip one pair of
/// surrounding quotes from the path.
pub(crate) fn parse_definition(query: &str) -> Definition<'_> {
    let (keyword, path) = query.split_once(':').unwrap_or((query, ""));
    Definition {
        keyword: keyword.trim(),
        path: strip_quotes(path.trim()),
    }
}

fn strip_quotes(path: &str) -> &str {
    for quote in ['"', '\''] {
        if path.len() >= 2 && path.starts_with(quote) && path.ends_with(quote) {
            return &path[1..path.len() - 1];
        }
    }
    path
}

/// Handle a definition query end to end: validate in order, register,
/// persist, and report the outcome as a single item.
pub fn run(query: &str, store: &mut SettingsStore, fs: &dyn FileSystemProbe) -> Vec<ResultItem> {
    let def = parse_definition(query);

    let outcome = validate_and_register(&def, store, fs);
    match outcome {
        Ok(()) => {
            debug!(keyword = def.keyword, path = def.path, "keyword registered");
            vec![ResultItem::open(
                "Keyword saved",
                format!("Keyword: {} → Path: {}", def.keyword.to_lowercase(), def.path),
                Icon::App,
                Path::new(def.path),
            )]
        }
        Err(err) => {
            warn!(keyword = def.keyword, %err, "registration rejected");
            vec![error_item(&err)]
        }
    }
}

fn validate_and_register(
    def: &Definition<'_>,
    store: &mut SettingsStore,
    fs: &dyn FileSystemProbe,
) -> crate::errors::Result<()> {
    if def.keyword.is_empty() {
        return Err(ResolveError::InvalidInput("keyword".to_string()));
    }
    if def.path.is_empty() {
        return Err(ResolveError::InvalidInput("path".to_string()));
    }
    if !fs.exists(Path::new(def.path)) {
        return Err(ResolveError::PathNotFound(def.path.into()));
    }
    store.register(def.keyword, def.path)
}
