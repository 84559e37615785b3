// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword settings: the insertion-ordered keyword map and its JSON store.
//!
//! The settings file is the host-visible format `{"keywords": {kw: path}}`,
//! UTF-8, pretty-printed, written by direct overwrite. A missing or
//! unparsable file degrades to an empty map; it never aborts the plugin.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{ResolveError, Result};

/// Ordered keyword → path mapping.
///
/// Prefix matches are emitted in registration order, so the map keeps
/// insertion order rather than sorting keys. Keys are stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMap {
    entries: Vec<(String, String)>,
}

impl KeywordMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, p)| p.as_str())
    }

    /// The keyword already claiming `path`, if any.
    pub fn keyword_for_path(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, p)| p == path)
            .map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_str()))
    }

    /// Keywords starting with the lowercased query, in insertion order.
    pub fn prefix_matches(&self, query: &str) -> Vec<(&str, &str)> {
        let needle = query.to_lowercase();
        self.iter().filter(|(k, _)| k.starts_with(&needle)).collect()
    }

    /// Register a keyword, enforcing the uniqueness rules.
    ///
    /// The keyword is lowercased before storage. Entries loaded from disk
    /// that already violate path uniqueness are left alone; the rule only
    /// applies to new registrations.
    pub fn insert(&mut self, keyword: &str, path: &str) -> Result<()> {
        let keyword = keyword.to_lowercase();
        if self.get(&keyword).is_some() {
            return Err(ResolveError::DuplicateKeyword(keyword));
        }
        if let Some(existing) = self.keyword_for_path(path) {
            return Err(ResolveError::DuplicatePath {
                keyword: existing.to_string(),
            });
        }
        self.entries.push((keyword, path.to_string()));
        Ok(())
    }

    /// Remove a keyword, returning its path. Survivors keep their order.
    pub fn remove(&mut self, keyword: &str) -> Option<String> {
        let keyword = keyword.to_lowercase();
        let index = self.entries.iter().position(|(k, _)| *k == keyword)?;
        Some(self.entries.remove(index).1)
    }
}

impl Serialize for KeywordMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, path) in &self.entries {
            map.serialize_entry(keyword, path)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeywordMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = KeywordMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of keyword to path")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, String)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((keyword, path)) = access.next_entry::<String, String>()? {
                    // Duplicate keys in the file: last one wins, in place.
                    match entries.iter_mut().find(|(k, _)| *k == keyword) {
                        Some(entry) => entry.1 = path,
                        None => entries.push((keyword, path)),
                    }
                }
                Ok(KeywordMap { entries })
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// On-disk settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub keywords: KeywordMap,
}

/// The settings file plus its in-memory state.
///
/// Single-writer by design: queries are resolved strictly sequentially
/// within one process, and concurrent instances are last-writer-wins.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`.
    ///
    /// A missing file yields an empty map. Malformed content is logged
    /// and replaced by an empty map; the broken file is overwritten on
    /// the next save.
    pub fn load(path: &Path) -> Self {
        let settings = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed settings file, starting empty");
                    Settings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read settings, starting empty");
                Settings::default()
            }
        };
        debug!(path = %path.display(), keywords = settings.keywords.len(), "loaded settings");
        Self {
            path: path.to_path_buf(),
            settings,
        }
    }

    pub fn keywords(&self) -> &KeywordMap {
        &self.settings.keywords
    }

    /// Write the settings file. Direct overwrite, no temp-file swap.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.settings)
            .map_err(|err| ResolveError::MalformedSettings(err.to_string()))?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Register `keyword → path` and persist before returning.
    pub fn register(&mut self, keyword: &str, path: &str) -> Result<()> {
        self.settings.keywords.insert(keyword, path)?;
        self.save()
    }

    /// Unregister a keyword and persist. Returns the removed path.
    pub fn unregister(&mut self, keyword: &str) -> Result<Option<String>> {
        match self.settings.keywords.remove(keyword) {
            Some(path) => {
                self.save()?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}

/// Default settings location: `<config dir>/folderkey/settings.json`.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folderkey")
        .join("settings.json")
}
