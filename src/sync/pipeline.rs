//! 同期処理全体の実行（抽出 → 照合 → 削除）

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    ConfigManager,
    FileMatcher,
    MatcherError,
};
use crate::dictionary::{
    DictionaryError,
    LocaleDictionary,
    ReferenceDictionary,
    discover_locale_files,
};
use crate::extract::{
    ExtractError,
    Extraction,
    MarkerRule,
    extract_keys,
};
use crate::sync::prune::{
    PruneOutcome,
    prune_locales,
};
use crate::sync::reconcile::{
    Reconciliation,
    reconcile,
};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Nothing was extracted; writing would wipe the reference dictionary
    #[error(
        "No translatable strings found under {}. Check the source root, or pass --allow-empty to write an empty reference dictionary",
        root.display()
    )]
    NoKeysFound { root: PathBuf },
}

/// 同期処理の結果
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// 抽出結果
    pub extraction: Extraction,
    /// 照合結果（書き込まれたリファレンス辞書を含む）
    pub reconciliation: Reconciliation,
    /// リファレンス辞書のパス
    pub reference_path: PathBuf,
    /// 各ロケールファイルの削除結果
    pub pruned: Vec<PruneOutcome>,
}

/// 翻訳文字列を同期する
///
/// 1. 既存のリファレンス辞書と全ロケールファイルを読み込む（書き込み前に検証）
/// 2. ソースツリーから翻訳キーを抽出
/// 3. リファレンス辞書を照合して上書き
/// 4. ロケールファイルから不要なキーを削除
///
/// # Errors
/// - リファレンス辞書またはロケールファイルが不正な JSON（何も書き込まない）
/// - ソースルートが存在しない
/// - キーが 1 つも見つからず、`allow_empty` が無効
/// - ファイル書き込みエラー
pub fn run_sync(config: &ConfigManager) -> Result<SyncSummary, SyncError> {
    let settings = &config.get_settings().i18n;

    let source_matcher = FileMatcher::for_sources(config.resolve(&settings.source_root), settings)?;
    let locale_matcher = FileMatcher::for_locales(config.resolve(&settings.locale_dir), settings)?;
    let rule = MarkerRule::new(&settings.marker)?;
    let reference_path = config.resolve(&settings.reference_file);

    // 書き込み前にすべての入力を検証する
    let previous = ReferenceDictionary::load(&reference_path)?;
    let mut locales = discover_locale_files(&locale_matcher, &reference_path)
        .iter()
        .map(|path| LocaleDictionary::load(path))
        .collect::<Result<Vec<_>, _>>()?;

    let extraction = extract_keys(&source_matcher, &rule, settings.respect_gitignore)?;

    if extraction.keys.is_empty() {
        if !settings.allow_empty {
            return Err(SyncError::NoKeysFound { root: source_matcher.root().to_path_buf() });
        }
        tracing::warn!("No translatable strings found; writing an empty reference dictionary");
    }

    let reconciliation = reconcile(&extraction.keys, &previous);
    reconciliation.reference.write(&reference_path)?;
    tracing::debug!(path = %reference_path.display(), "Reference dictionary written");

    let pruned = prune_locales(&mut locales, &reconciliation.reference)?;

    Ok(SyncSummary { extraction, reconciliation, reference_path, pruned })
}
