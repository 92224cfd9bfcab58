//! Locale dictionary input definitions

use std::collections::BTreeSet;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use serde_json::{
    Map,
    Value,
};

use crate::config::FileMatcher;
use crate::dictionary::edit::delete_keys_from_json_text;
use crate::dictionary::error::DictionaryError;
use crate::dictionary::reference::ReferenceDictionary;

/// Read a dictionary file and parse it as a JSON object.
pub(crate) fn read_json_object(path: &Path) -> Result<(String, Map<String, Value>), DictionaryError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| DictionaryError::Read { path: path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| DictionaryError::Parse { path: path.to_path_buf(), source })?;

    match json {
        Value::Object(map) => Ok((content, map)),
        _ => Err(DictionaryError::NotAnObject { path: path.to_path_buf() }),
    }
}

/// A per-language translation file.
///
/// Only the key set is interpreted; the original text is kept so that edits
/// leave everything else untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDictionary {
    path: PathBuf,
    json_text: String,
    keys: BTreeSet<String>,
}

impl LocaleDictionary {
    /// Load a locale dictionary from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a JSON object.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let (json_text, map) = read_json_object(path)?;
        let keys = map.into_iter().map(|(key, _)| key).collect();

        Ok(Self { path: path.to_path_buf(), json_text, keys })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn json_text(&self) -> &str {
        &self.json_text
    }

    #[must_use]
    pub const fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    /// Keys of this locale that the reference no longer knows, sorted.
    #[must_use]
    pub fn stale_keys(&self, reference: &ReferenceDictionary) -> Vec<String> {
        self.keys.iter().filter(|key| !reference.contains(key)).cloned().collect()
    }

    /// Reference keys this locale does not translate yet, sorted.
    #[must_use]
    pub fn missing_keys(&self, reference: &ReferenceDictionary) -> Vec<String> {
        reference.keys().filter(|key| !self.keys.contains(*key)).cloned().collect()
    }

    /// Remove `keys` and write the file back.
    ///
    /// Nothing is written when none of the keys is present.
    ///
    /// # Errors
    /// Returns error if the text cannot be edited or the file cannot be written.
    pub fn remove_keys(&mut self, keys: &[String]) -> Result<Vec<String>, DictionaryError> {
        let result = delete_keys_from_json_text(&self.json_text, keys)
            .ok_or_else(|| DictionaryError::Edit { path: self.path.clone() })?;

        if result.deleted_keys.is_empty() {
            return Ok(result.deleted_keys);
        }

        std::fs::write(&self.path, &result.new_text)
            .map_err(|source| DictionaryError::Write { path: self.path.clone(), source })?;

        for key in &result.deleted_keys {
            self.keys.remove(key);
        }
        self.json_text = result.new_text;

        Ok(result.deleted_keys)
    }
}

/// Whether two paths name the same file, falling back to a plain comparison
/// when either cannot be resolved.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// 翻訳ファイルを検索
///
/// ロケールディレクトリ以下を再帰的に走査し、パターンに一致するファイルを
/// パス順で返す。リファレンス辞書自身は除外する。
/// ディレクトリが存在しない場合は空のリストを返す。
#[must_use]
pub fn discover_locale_files(matcher: &FileMatcher, reference_path: &Path) -> Vec<PathBuf> {
    let root = matcher.root();
    if !root.is_dir() {
        tracing::warn!("Locale directory not found: {}", root.display());
        return Vec::new();
    }

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !matcher.is_match(path) || is_same_file(path, reference_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::I18nSettings;

    fn reference(keys: &[&str]) -> ReferenceDictionary {
        ReferenceDictionary::from_keys(keys.iter().copied().map(String::from))
    }

    #[googletest::test]
    fn test_load_locale_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("it_IT.json");
        fs::write(&path, r#"{"Save": "Salva", "Cancel": "Annulla"}"#).unwrap();

        let locale = LocaleDictionary::load(&path).unwrap();

        expect_that!(locale.keys(), elements_are![eq("Cancel"), eq("Save")]);
        assert_eq!(locale.path(), path.as_path());
        expect_that!(locale.json_text(), contains_substring("\"Salva\""));
    }

    #[rstest]
    #[case("[]")]
    #[case("\"text\"")]
    fn test_load_non_object(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de_DE.json");
        fs::write(&path, content).unwrap();

        let result = LocaleDictionary::load(&path);

        assert!(matches!(result, Err(DictionaryError::NotAnObject { .. })));
    }

    #[rstest]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de_DE.json");
        fs::write(&path, "{\"Save\": ").unwrap();

        let result = LocaleDictionary::load(&path);

        assert!(matches!(result, Err(DictionaryError::Parse { .. })));
    }

    #[googletest::test]
    fn test_stale_and_missing_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr_FR.json");
        fs::write(&path, r#"{"Delete": "Supprimer", "Save": "Enregistrer"}"#).unwrap();
        let locale = LocaleDictionary::load(&path).unwrap();

        let reference = reference(&["Cancel", "Save"]);

        expect_that!(locale.stale_keys(&reference), elements_are![eq("Delete")]);
        expect_that!(locale.missing_keys(&reference), elements_are![eq("Cancel")]);
    }

    #[googletest::test]
    fn test_remove_keys_rewrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr_FR.json");
        fs::write(&path, "{\n  \"Delete\": \"Supprimer\",\n  \"Save\": \"Enregistrer\"\n}\n")
            .unwrap();
        let mut locale = LocaleDictionary::load(&path).unwrap();

        let removed = locale.remove_keys(&["Delete".to_string()]).unwrap();

        expect_that!(removed, elements_are![eq("Delete")]);
        expect_that!(locale.keys(), elements_are![eq("Save")]);
        let on_disk = LocaleDictionary::load(&path).unwrap();
        expect_that!(on_disk.keys(), elements_are![eq("Save")]);
    }

    #[googletest::test]
    fn test_discover_locale_files_skips_reference() {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("assets/locales");
        fs::create_dir_all(locales.join("extra")).unwrap();
        for name in ["en_US.json", "it_IT.json", "extra/de_DE.json", "README.md"] {
            fs::write(locales.join(name), "{}").unwrap();
        }

        let matcher = FileMatcher::for_locales(locales.clone(), &I18nSettings::default()).unwrap();
        let files = discover_locale_files(&matcher, &locales.join("en_US.json"));

        assert_eq!(files, vec![locales.join("extra/de_DE.json"), locales.join("it_IT.json")]);
    }

    #[googletest::test]
    fn test_discover_locale_files_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("missing");

        let matcher = FileMatcher::for_locales(locales.clone(), &I18nSettings::default()).unwrap();
        let files = discover_locale_files(&matcher, &locales.join("en_US.json"));

        expect_that!(files, is_empty());
    }
}
