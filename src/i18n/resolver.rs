// src/i18n/resolver.rs

use serde_json::{Map as JsonMap, Value as JsonValue};

/// One language's string table.
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    language: String,
    root: JsonMap<String, JsonValue>,
}

impl Translations {
    pub fn new(language: impl Into<String>, root: JsonMap<String, JsonValue>) -> Self {
        Self {
            language: language.into(),
            root,
        }
    }

    /// Table with no entries: every lookup returns its fallback.
    pub fn empty(language: impl Into<String>) -> Self {
        Self::new(language, JsonMap::new())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn lookup(&self, path: &str) -> Option<&JsonValue> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let mut cur = self.root.get(first)?;
        for p in parts {
            cur = cur.as_object()?.get(p)?;
        }
        Some(cur)
    }

    /// Dotted path lookup; missing or non-string nodes give `fallback`.
    pub fn t<'a>(&'a self, path: &str, fallback: &'a str) -> &'a str {
        self.lookup(path)
            .and_then(|v| v.as_str())
            .unwrap_or(fallback)
    }

    pub fn has_string(&self, path: &str) -> bool {
        matches!(self.lookup(path), Some(JsonValue::String(_)))
    }

    /// `(key, label)` pairs of an option table, in file order. Non-string
    /// entries are skipped.
    pub fn options(&self, path: &str) -> Vec<(String, String)> {
        self.lookup(path)
            .and_then(|v| v.as_object())
            .map(|m| {
                m.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }
}
