//! ビルドマニフェスト（`pubspec.yaml`）のバージョン更新

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ConfigManager;
use crate::release::changelog::{
    copy_changelog,
    read_changelog,
};
use crate::release::error::ReleaseError;

/// `version: 1.4.2+57` の形式の行
#[allow(clippy::expect_used)]
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"version:\s*([\d.]+)\+(\d+)").expect("version line pattern is valid")
});

/// ドット区切りの数字（例: `1.4.2`）
#[allow(clippy::expect_used)]
static VERSION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\d+(?:\.\d+)*\z").expect("version name pattern is valid")
});

/// Version name and build number as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    pub name: String,
    pub code: u64,
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.name, self.code)
    }
}

/// Result of a version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    pub previous: ManifestVersion,
    pub current: ManifestVersion,
    pub manifest_path: PathBuf,
    /// Files the changelog was copied to.
    pub changelog_copies: Vec<PathBuf>,
}

/// バージョン名の形式を検証
///
/// # Errors
/// ドット区切りの数字でない場合
pub fn validate_version_name(name: &str) -> Result<(), ReleaseError> {
    if VERSION_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ReleaseError::InvalidVersionName(name.to_string()))
    }
}

/// マニフェストのテキストを書き換える
///
/// 最初に見つかったバージョン行だけを `version: <new_name>+<code + 1>` に置き換え、
/// それ以外の部分はそのまま残す。
///
/// # Returns
/// 書き換え後のテキスト、変更前と変更後のバージョン
///
/// # Errors
/// - バージョン行が見つからない
/// - ビルド番号が大きすぎる
pub fn bump_manifest_text(
    text: &str,
    new_name: &str,
    manifest_path: &Path,
) -> Result<(String, ManifestVersion, ManifestVersion), ReleaseError> {
    let Some(caps) = VERSION_LINE.captures(text) else {
        return Err(ReleaseError::VersionNotFound { path: manifest_path.to_path_buf() });
    };
    let (Some(whole), Some(name), Some(code)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return Err(ReleaseError::VersionNotFound { path: manifest_path.to_path_buf() });
    };

    let previous_code = code
        .as_str()
        .parse::<u64>()
        .map_err(|_| ReleaseError::BuildNumberOverflow(code.as_str().to_string()))?;
    let new_code = previous_code
        .checked_add(1)
        .ok_or_else(|| ReleaseError::BuildNumberOverflow(code.as_str().to_string()))?;

    let previous = ManifestVersion { name: name.as_str().to_string(), code: previous_code };
    let current = ManifestVersion { name: new_name.to_string(), code: new_code };

    let mut new_text = String::with_capacity(text.len() + new_name.len());
    new_text.push_str(text.get(..whole.start()).unwrap_or_default());
    new_text.push_str(&format!("version: {current}"));
    new_text.push_str(text.get(whole.end()..).unwrap_or_default());

    Ok((new_text, previous, current))
}

/// バージョンを更新し、変更履歴をストア用メタデータにコピーする
///
/// 変更履歴とマニフェストの読み込み・検証をすべて終えてから書き込む。
///
/// # Arguments
/// * `config` - 設定（パスはワークスペースルート基準）
/// * `new_name` - 新しいバージョン名（例: `1.4.2`）
/// * `changelog_path` - 変更履歴ファイル
///
/// # Errors
/// - バージョン名が不正
/// - ファイルの読み書きエラー
/// - マニフェストにバージョン行がない
pub fn bump_version(
    config: &ConfigManager,
    new_name: &str,
    changelog_path: &Path,
) -> Result<VersionBump, ReleaseError> {
    validate_version_name(new_name)?;

    let settings = &config.get_settings().release;
    let manifest_path = config.resolve(&settings.manifest_file);

    let changelog = read_changelog(changelog_path)?;
    let manifest = std::fs::read_to_string(&manifest_path)
        .map_err(|source| ReleaseError::Read { path: manifest_path.clone(), source })?;

    let (new_manifest, previous, current) =
        bump_manifest_text(&manifest, new_name, &manifest_path)?;

    std::fs::write(&manifest_path, new_manifest)
        .map_err(|source| ReleaseError::Write { path: manifest_path.clone(), source })?;
    tracing::info!("Updated version to {} in {}", current.name, manifest_path.display());
    tracing::info!("Incremented version code to {}", current.code);

    let changelog_copies = vec![
        config.resolve(&settings.changelog_dir).join(format!("{}.txt", current.code)),
        config.resolve(&settings.whats_new_file),
    ];
    copy_changelog(&changelog, &changelog_copies)?;

    Ok(VersionBump { previous, current, manifest_path, changelog_copies })
}
