//! Reference dictionary: the identity mapping of every known translation key.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::dictionary::error::DictionaryError;
use crate::dictionary::locale::read_json_object;

/// Canonical set of translation keys, persisted as `{"key": "key", ...}`.
///
/// Keys are kept in ascending byte order so the written file is stable no
/// matter in which order keys were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDictionary {
    entries: BTreeMap<String, String>,
}

impl ReferenceDictionary {
    /// Build the identity mapping over `keys`. Duplicates collapse.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self { entries: keys.into_iter().map(|key| (key.clone(), key)).collect() }
    }

    /// Load the dictionary written by a previous run.
    ///
    /// An absent file is the first-run case and yields an empty dictionary.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        if !path.exists() {
            tracing::debug!("Reference dictionary not found, starting empty: {}", path.display());
            return Ok(Self::default());
        }

        let (_, map) = read_json_object(path)?;
        let entries = map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self { entries })
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON (two-space indent, UTF-8 kept as-is) with a trailing newline.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json_string(&self) -> Result<String, DictionaryError> {
        let mut text = serde_json::to_string_pretty(&self.entries)?;
        text.push('\n');
        Ok(text)
    }

    /// Overwrite `path` with this dictionary, creating parent directories.
    ///
    /// # Errors
    /// Returns error if serialization or any filesystem operation fails.
    pub fn write(&self, path: &Path) -> Result<(), DictionaryError> {
        let text = self.to_json_string()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| DictionaryError::Write { path: path.to_path_buf(), source })?;
        }

        std::fs::write(path, text)
            .map_err(|source| DictionaryError::Write { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn test_from_keys_is_sorted_identity() {
        let dictionary = ReferenceDictionary::from_keys(
            ["Save", "Cancel", "Save", "add"].into_iter().map(String::from),
        );

        expect_that!(dictionary.len(), eq(3));
        expect_that!(
            dictionary.to_json_string().unwrap(),
            eq("{\n  \"Cancel\": \"Cancel\",\n  \"Save\": \"Save\",\n  \"add\": \"add\"\n}\n")
        );
    }

    #[googletest::test]
    fn test_empty_dictionary_serialization() {
        let dictionary = ReferenceDictionary::default();

        expect_that!(dictionary.is_empty(), eq(true));
        expect_that!(dictionary.to_json_string().unwrap(), eq("{}\n"));
    }

    #[googletest::test]
    fn test_non_ascii_is_not_escaped() {
        let dictionary = ReferenceDictionary::from_keys(["Café €".to_string()]);

        expect_that!(dictionary.to_json_string().unwrap(), contains_substring("\"Café €\""));
    }

    #[rstest]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();

        let dictionary = ReferenceDictionary::load(&temp_dir.path().join("en_US.json")).unwrap();

        assert!(dictionary.is_empty());
    }

    #[rstest]
    fn test_load_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en_US.json");
        fs::write(&path, "{ not json").unwrap();

        let result = ReferenceDictionary::load(&path);

        assert!(matches!(result, Err(DictionaryError::Parse { .. })));
    }

    #[rstest]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("assets/locales/en_US.json");
        let dictionary =
            ReferenceDictionary::from_keys(["Home".to_string(), "Settings".to_string()]);

        dictionary.write(&path).unwrap();
        let loaded = ReferenceDictionary::load(&path).unwrap();

        assert_eq!(loaded, dictionary);
        assert!(loaded.contains("Home"));
        assert!(!loaded.contains("home"));
    }
}
