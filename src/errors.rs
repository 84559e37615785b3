// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for query resolution and settings persistence.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("keyword already exists: {0}")]
    DuplicateKeyword(String),

    #[error("path already registered under keyword {keyword}")]
    DuplicatePath { keyword: String },

    #[error("access denied: {0}")]
    AccessDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings: {0}")]
    MalformedSettings(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
