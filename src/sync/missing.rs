//! 未翻訳キーの一覧（読み取りのみ）

use std::path::PathBuf;

use crate::config::{
    ConfigManager,
    FileMatcher,
};
use crate::dictionary::{
    LocaleDictionary,
    ReferenceDictionary,
    discover_locale_files,
};
use crate::sync::pipeline::SyncError;

/// ロケールファイルごとの未翻訳キー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReport {
    pub path: PathBuf,
    /// リファレンス辞書にあり、このロケールにないキー（ソート済み）
    pub missing: Vec<String>,
    /// リファレンス辞書のキー数
    pub total: usize,
}

impl MissingReport {
    /// Number of reference keys this locale translates.
    #[must_use]
    pub fn translated(&self) -> usize {
        self.total.saturating_sub(self.missing.len())
    }
}

/// 各ロケールファイルの未翻訳キーを列挙する
///
/// ファイルは一切書き換えない。
///
/// # Errors
/// - リファレンス辞書またはロケールファイルが不正な JSON
/// - パターンが不正
pub fn find_missing_translations(config: &ConfigManager) -> Result<Vec<MissingReport>, SyncError> {
    let settings = &config.get_settings().i18n;
    let reference_path = config.resolve(&settings.reference_file);
    let locale_matcher = FileMatcher::for_locales(config.resolve(&settings.locale_dir), settings)?;

    let reference = ReferenceDictionary::load(&reference_path)?;
    if reference.is_empty() {
        tracing::warn!(
            "Reference dictionary {} is empty or missing; run `sync` first",
            reference_path.display()
        );
    }

    discover_locale_files(&locale_matcher, &reference_path)
        .iter()
        .map(|path| -> Result<MissingReport, SyncError> {
            let locale = LocaleDictionary::load(path)?;
            Ok(MissingReport {
                path: path.clone(),
                missing: locale.missing_keys(&reference),
                total: reference.len(),
            })
        })
        .collect()
}
