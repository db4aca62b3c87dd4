//! Property table construction and lookup.
//!
//! A [`PropertyTable`] maps placeholder names to replacement strings. It is
//! built once per invocation — from `key=value` entries, from a flat JSON
//! object, or both layered — and is read-only afterwards, so multiple
//! renders can share one table by reference without interference.
//!
//! ## Entry format
//!
//! Each inline entry is `key=value`, split on exactly one `=`. The key must
//! be non-empty and neither side may itself contain `=`; anything else is
//! rejected with [`ConfgenError::MalformedProperty`] rather than silently
//! truncated. Values containing `=` can still be supplied through a JSON
//! property file, which has no such restriction.
//!
//! Duplicate keys follow last-write-wins, matching plain `key=value`
//! assignment semantics. An absent key is a lookup failure, never an
//! implicit empty string.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfgenError, Result};

/// Immutable mapping from placeholder name to replacement string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable {
    entries: HashMap<String, String>,
}

impl PropertyTable {
    /// Create an empty table. Rendering against it succeeds only for
    /// templates with no placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `key=value` entries.
    ///
    /// Later entries override earlier ones for the same key.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.apply_entries(entries)?;
        Ok(table)
    }

    /// Build a table from already-split pairs.
    ///
    /// Unlike [`from_entries`](Self::from_entries) this places no syntactic
    /// restriction on keys or values — it is the only way to define the
    /// empty-string key, which `@@` in a template resolves against.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Load a table from a JSON file containing a flat object of strings,
    /// e.g. `{"VERSION": "0.20.0", "PACKAGE": "ixion"}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfgenError::PropertiesNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let table: PropertyTable =
            serde_json::from_str(&contents).map_err(|e| ConfgenError::PropertiesParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(table)
    }

    /// Parse and layer `key=value` entries on top of the current contents.
    ///
    /// Construction-time helper for combining a JSON property file with
    /// inline overrides; once a table is handed to the renderer it should be
    /// treated as frozen.
    pub fn apply_entries<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref();
            let (key, value) = split_entry(entry)?;
            tracing::debug!(key, value, "property set");
            self.entries.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    /// Look up the replacement value for a placeholder name.
    ///
    /// Case- and whitespace-sensitive; no trimming is performed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is defined in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of defined properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a `key=value` entry on its single `=`.
///
/// Fails when there is no `=`, more than one `=`, or an empty key.
fn split_entry(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.contains('=') => Ok((key, value)),
        _ => Err(ConfgenError::MalformedProperty {
            entry: entry.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_single() {
        let table = PropertyTable::from_entries(["K=V"]).unwrap();
        assert_eq!(table.get("K"), Some("V"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_entries_is_deterministic() {
        let a = PropertyTable::from_entries(["K=V"]).unwrap();
        let b = PropertyTable::from_entries(["K=V"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let table = PropertyTable::from_entries(["K=V1", "K=V2"]).unwrap();
        assert_eq!(table.get("K"), Some("V2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_value_allowed() {
        let table = PropertyTable::from_entries(["K="]).unwrap();
        assert_eq!(table.get("K"), Some(""));
    }

    #[test]
    fn test_missing_separator_rejected() {
        let err = PropertyTable::from_entries(["NOVALUE"]).unwrap_err();
        assert!(matches!(
            err,
            ConfgenError::MalformedProperty { entry } if entry == "NOVALUE"
        ));
    }

    #[test]
    fn test_multiple_separators_rejected() {
        assert!(PropertyTable::from_entries(["K=a=b"]).is_err());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(PropertyTable::from_entries(["=V"]).is_err());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = PropertyTable::from_entries(["Key=V"]).unwrap();
        assert_eq!(table.get("Key"), Some("V"));
        assert_eq!(table.get("key"), None);
        assert_eq!(table.get("KEY"), None);
    }

    #[test]
    fn test_absent_key_is_none_not_empty() {
        let table = PropertyTable::new();
        assert_eq!(table.get("MISSING"), None);
    }

    #[test]
    fn test_from_pairs_allows_empty_key() {
        let table = PropertyTable::from_pairs([(String::new(), "at".to_string())]);
        assert_eq!(table.get(""), Some("at"));
    }

    #[test]
    fn test_apply_entries_layering() {
        let mut table = PropertyTable::from_entries(["A=1", "B=2"]).unwrap();
        table.apply_entries(["B=override", "C=3"]).unwrap();
        assert_eq!(table.get("A"), Some("1"));
        assert_eq!(table.get("B"), Some("override"));
        assert_eq!(table.get("C"), Some("3"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.json");
        std::fs::write(&path, r#"{"VERSION": "0.20.0", "PACKAGE": "ixion"}"#).unwrap();

        let table = PropertyTable::from_json_file(&path).unwrap();
        assert_eq!(table.get("VERSION"), Some("0.20.0"));
        assert_eq!(table.get("PACKAGE"), Some("ixion"));
    }

    #[test]
    fn test_from_json_file_value_may_contain_equals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.json");
        std::fs::write(&path, r#"{"CFLAGS": "-std=c++17"}"#).unwrap();

        let table = PropertyTable::from_json_file(&path).unwrap();
        assert_eq!(table.get("CFLAGS"), Some("-std=c++17"));
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = PropertyTable::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfgenError::PropertiesNotFound { .. }));
    }

    #[test]
    fn test_from_json_file_rejects_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.json");
        std::fs::write(&path, r#"{"COUNT": 3}"#).unwrap();

        let err = PropertyTable::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ConfgenError::PropertiesParse { .. }));
    }
}
