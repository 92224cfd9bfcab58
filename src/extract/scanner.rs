//! ソースツリーを走査して翻訳キーを抽出する

use std::path::Path;

use ignore::WalkBuilder;

use crate::config::FileMatcher;
use crate::extract::rule::MarkerRule;
use crate::extract::types::{
    ExtractError,
    Extraction,
    SkippedFile,
};

/// ソースツリーから翻訳キーを抽出
///
/// 読み込めないファイル（権限エラー、UTF-8 でない等）は警告を出してスキップし、
/// 走査は続行する。
///
/// # Arguments
/// * `matcher` - 対象ファイルを絞り込むマッチャー（ルートが走査の起点）
/// * `rule` - 翻訳対象リテラルを検出するルール
/// * `respect_gitignore` - `.gitignore` 等の除外設定を尊重するか
///
/// # Errors
/// - ルートディレクトリが存在しない
pub fn extract_keys(
    matcher: &FileMatcher,
    rule: &MarkerRule,
    respect_gitignore: bool,
) -> Result<Extraction, ExtractError> {
    let root = matcher.root();
    if !root.is_dir() {
        return Err(ExtractError::RootNotFound(root.to_path_buf()));
    }

    tracing::debug!(root = %root.display(), marker = rule.marker(), "Scanning source tree");

    let mut extraction = Extraction::default();

    // 走査順をファイル名でソートし、スキップ一覧の順序も安定させる
    for result in WalkBuilder::new(root)
        .hidden(false)
        .ignore(respect_gitignore)
        .parents(respect_gitignore)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "Failed to read directory entry, skipping");
                extraction.skipped.push(SkippedFile {
                    path: root.to_path_buf(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !matcher.is_match(path) {
            continue;
        }

        scan_file(path, rule, &mut extraction);
    }

    tracing::debug!(
        keys = extraction.keys.len(),
        files = extraction.scanned_files,
        skipped = extraction.skipped.len(),
        "Scan finished"
    );

    Ok(extraction)
}

/// 単一ファイルからキーを抽出して結果に追加
fn scan_file(path: &Path, rule: &MarkerRule, extraction: &mut Extraction) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            // ファイル読み込みエラーは警告として扱い、処理を続行
            tracing::warn!("Error reading file {}: {}", path.display(), e);
            extraction
                .skipped
                .push(SkippedFile { path: path.to_path_buf(), reason: e.to_string() });
            return;
        }
    };

    extraction.scanned_files += 1;
    extraction.keys.extend(rule.keys(&content).map(ToString::to_string));
}
