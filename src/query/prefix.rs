// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-prefix expansion: header item plus scored directory listing
//! per matching keyword.

use std::path::Path;
use tracing::debug;

use crate::fsio::FileSystemProbe;
use crate::item::{Icon, ResultItem};
use crate::query::listing;
use crate::settings::KeywordMap;

const SCORE_KEYWORD_HEADER: i32 = 1000;
const SCORE_DIRECTORY: i32 = 100;
const SCORE_FILE: i32 = 0;

/// Expand keywords starting with the lowercased query.
///
/// Returns `None` when nothing matches so the resolver can fall through
/// to the no-match item. Matches are emitted in registration order, each
/// as a header item followed by the keyword target's listing.
pub fn run(query: &str, keywords: &KeywordMap, fs: &dyn FileSystemProbe) -> Option<Vec<ResultItem>> {
    let matches = keywords.prefix_matches(query);
    if matches.is_empty() {
        return None;
    }
    debug!(query, matches = matches.len(), "expanding keyword prefix");

    let mut items = Vec::new();
    for (keyword, path) in matches {
        let target = Path::new(path);
        items.push(
            ResultItem::open(
                keyword,
                format!("Keyword: {keyword} → Full path: {path}"),
                Icon::Folder,
                target,
            )
            .with_score(SCORE_KEYWORD_HEADER),
        );
        items.extend(listing::list_path_with_scores(
            target,
            fs,
            SCORE_DIRECTORY,
            SCORE_FILE,
        ));
    }
    Some(items)
}
