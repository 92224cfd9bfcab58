use std::path::{
    Path,
    PathBuf,
};

use crate::release::error::ReleaseError;

/// Read the release changelog.
///
/// # Errors
/// Returns error if the file cannot be read as UTF-8 text.
pub fn read_changelog(path: &Path) -> Result<String, ReleaseError> {
    std::fs::read_to_string(path)
        .map_err(|source| ReleaseError::Read { path: path.to_path_buf(), source })
}

/// 変更履歴を各コピー先に書き込む
///
/// 親ディレクトリがなければ作成し、既存のファイルは上書きする。
///
/// # Errors
/// ディレクトリ作成またはファイル書き込みに失敗した場合
pub fn copy_changelog(changelog: &str, destinations: &[PathBuf]) -> Result<(), ReleaseError> {
    for destination in destinations {
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| ReleaseError::Write { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(destination, changelog)
            .map_err(|source| ReleaseError::Write { path: destination.clone(), source })?;
        tracing::info!("Copied changelog to {}", destination.display());
    }
    Ok(())
}
