// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory listing: direct children as actionable items.

use std::path::Path;
use tracing::debug;

use crate::errors::ResolveError;
use crate::fsio::{DirChild, FileSystemProbe};
use crate::item::{Icon, ResultItem};
use crate::query::error_item;

/// List the direct children of `path`, folders first, each group sorted
/// case-insensitively by name. Enumeration failures degrade to a single
/// error item.
pub fn list_path(path: &Path, fs: &dyn FileSystemProbe) -> Vec<ResultItem> {
    list_path_with_scores(path, fs, 0, 0)
}

/// Scored variant used by keyword-prefix expansion.
pub(crate) fn list_path_with_scores(
    path: &Path,
    fs: &dyn FileSystemProbe,
    dir_score: i32,
    file_score: i32,
) -> Vec<ResultItem> {
    let mut children = match fs.read_dir(path) {
        Ok(children) => children,
        Err(err @ ResolveError::AccessDenied(_)) => {
            debug!(path = %path.display(), "listing denied");
            return vec![error_item(&err)];
        }
        Err(err) => return vec![error_item(&err)],
    };

    children.sort_by_cached_key(|child| (!child.is_dir, child.name.to_lowercase()));
    debug!(path = %path.display(), count = children.len(), "listed directory");

    children
        .iter()
        .map(|child| child_item(child, dir_score, file_score))
        .collect()
}

fn child_item(child: &DirChild, dir_score: i32, file_score: i32) -> ResultItem {
    let (kind, icon, score) = if child.is_dir {
        ("Folder", Icon::Folder, dir_score)
    } else {
        ("File", Icon::File, file_score)
    };
    ResultItem::open(
        child.name.clone(),
        format!("{kind}: {}", child.path.display()),
        icon,
        &child.path,
    )
    .with_score(score)
}
