// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result items returned to the host UI.
//!
//! Field names follow the launcher host's wire protocol (PascalCase
//! with a nested `JsonRPCAction`), so the serialized form can be handed
//! to the host unchanged.

use serde::{Serialize, Serializer};
use std::path::Path;

/// Icon shown next to a result item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    App,
    Folder,
    File,
}

impl Icon {
    pub fn path(self) -> &'static str {
        match self {
            Icon::App => "images/app.png",
            Icon::Folder => "images/folder.png",
            Icon::File => "images/file.png",
        }
    }
}

// Serialized as the IcoPath string the host expects.
impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Callback descriptor the host invokes when an item is activated.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcAction {
    pub method: String,
    pub parameters: Vec<String>,
    #[serde(rename = "dontHideAfterAction")]
    pub dont_hide_after_action: bool,
}

impl JsonRpcAction {
    /// The single side-effecting action the plugin exposes.
    pub fn open_path(path: &Path) -> Self {
        Self {
            method: "open_path".to_string(),
            parameters: vec![path.display().to_string()],
            dont_hide_after_action: false,
        }
    }
}

/// A single actionable entry returned to the host UI.
#[derive(Debug, Clone, Serialize)]
pub struct ResultItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "SubTitle")]
    pub subtitle: String,
    #[serde(rename = "IcoPath")]
    pub icon: Icon,
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub action: Option<JsonRpcAction>,
    #[serde(rename = "Score", skip_serializing_if = "score_is_default")]
    pub score: i32,
}

fn score_is_default(score: &i32) -> bool {
    *score == 0
}

impl ResultItem {
    /// Informational item with no action.
    pub fn info(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: Icon::App,
            action: None,
            score: 0,
        }
    }

    /// Actionable item opening `path` with the OS default handler.
    pub fn open(title: impl Into<String>, subtitle: impl Into<String>, icon: Icon, path: &Path) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon,
            action: Some(JsonRpcAction::open_path(path)),
            score: 0,
        }
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn wire_form_uses_host_field_names() {
        let item = ResultItem::open("docs", "Path: /tmp/docs", Icon::Folder, &PathBuf::from("/tmp/docs"))
            .with_score(1000);
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["Title"], "docs");
        assert_eq!(json["SubTitle"], "Path: /tmp/docs");
        assert_eq!(json["IcoPath"], "images/folder.png");
        assert_eq!(json["Score"], 1000);
        assert_eq!(json["JsonRPCAction"]["method"], "open_path");
        assert_eq!(json["JsonRPCAction"]["parameters"][0], "/tmp/docs");
        assert_eq!(json["JsonRPCAction"]["dontHideAfterAction"], false);
    }

    #[test]
    fn zero_score_and_missing_action_are_omitted() {
        let item = ResultItem::info("No keywords set", "Type 'keyword : path' to register one");
        let json = serde_json::to_value(&item).expect("serialize");
        assert!(json.get("Score").is_none());
        assert!(json.get("JsonRPCAction").is_none());
        assert_eq!(json["IcoPath"], "images/app.png");
    }
}
