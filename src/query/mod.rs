// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query resolution: dispatch a raw query to one of the three modes.

pub mod define;
pub mod listing;
pub mod prefix;

use std::path::Path;
use tracing::debug;

use crate::errors::ResolveError;
use crate::fsio::FileSystemProbe;
use crate::item::{Icon, ResultItem};
use crate::settings::{KeywordMap, SettingsStore};

pub(crate) const REGISTRATION_HINT: &str = "Type 'keyword : path' to register a new keyword";

/// Resolve a raw query into an ordered list of result items.
///
/// Dispatch order, first match wins: blank query lists the registered
/// keywords; a query containing `:` is a definition; an existing path is
/// listed; a keyword prefix expands its matches; anything else yields a
/// single no-match item. Errors never escape as panics or `Err` here,
/// they degrade to displayable items.
pub fn resolve(
    query: &str,
    store: &mut SettingsStore,
    fs: &dyn FileSystemProbe,
) -> Vec<ResultItem> {
    let trimmed = query.trim();
    debug!(query, "resolving query");

    if trimmed.is_empty() {
        return list_keywords(store.keywords());
    }

    if query.contains(':') {
        return define::run(query, store, fs);
    }

    if fs.exists(Path::new(trimmed)) {
        debug!(path = trimmed, "query names an existing path");
        return listing::list_path(Path::new(trimmed), fs);
    }

    if let Some(items) = prefix::run(trimmed, store.keywords(), fs) {
        return items;
    }

    vec![ResultItem::info(
        "Path or keyword not found",
        format!("'{trimmed}' is not a valid path or keyword. {REGISTRATION_HINT}"),
    )]
}

/// Blank-query listing: one item per registered keyword, or a
/// registration hint when nothing is registered yet.
pub fn list_keywords(keywords: &KeywordMap) -> Vec<ResultItem> {
    if keywords.is_empty() {
        return vec![ResultItem::info("No keywords set", REGISTRATION_HINT)];
    }

    keywords
        .iter()
        .map(|(keyword, path)| {
            ResultItem::open(
                format!("Keyword: {keyword}"),
                format!("Path: {path}"),
                Icon::App,
                Path::new(path),
            )
        })
        .collect()
}

/// Convert a resolution error into its single displayable item.
pub(crate) fn error_item(err: &ResolveError) -> ResultItem {
    let title = match err {
        ResolveError::InvalidInput(what) => format!("Invalid {what}"),
        ResolveError::PathNotFound(_) => "Invalid path".to_string(),
        ResolveError::DuplicateKeyword(_) | ResolveError::DuplicatePath { .. } => {
            "Cannot save keyword".to_string()
        }
        ResolveError::AccessDenied(_) => "Access denied".to_string(),
        ResolveError::Io(_) | ResolveError::MalformedSettings(_) => "Error".to_string(),
    };
    ResultItem::info(title, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsio::OsFileSystem;
    use crate::settings::SettingsStore;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::load(&dir.path().join("settings.json"))
    }

    #[test]
    fn blank_query_without_keywords_prompts_for_registration() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = store_in(&dir);

        let items = resolve("   ", &mut store, &OsFileSystem);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "No keywords set");
        assert!(items[0].action.is_none());
    }

    #[test]
    fn blank_query_lists_one_item_per_keyword() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = store_in(&dir);
        store
            .register("docs", &dir.path().display().to_string())
            .expect("register");

        let items = resolve("", &mut store, &OsFileSystem);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Keyword: docs");
        assert_eq!(items[0].score, 0);
        let action = items[0].action.as_ref().expect("action");
        assert_eq!(action.method, "open_path");
    }

    #[test]
    fn existing_path_query_lists_contents() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("a.txt"), "x").expect("write");
        let mut store = store_in(&dir);

        let query = dir.path().display().to_string();
        let items = resolve(&query, &mut store, &OsFileSystem);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "a.txt");
    }

    #[test]
    fn unknown_query_yields_single_no_match_item() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = store_in(&dir);
        store
            .register("docs", &dir.path().display().to_string())
            .expect("register");

        let items = resolve("zzz-no-such-thing", &mut store, &OsFileSystem);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Path or keyword not found");
        assert!(items[0].subtitle.contains("zzz-no-such-thing"));
        // No mutation on the no-match branch.
        assert_eq!(store.keywords().len(), 1);
    }
}
