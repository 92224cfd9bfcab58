//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    ToolSettings,
    loader,
};

/// 設定管理を行う
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: ToolSettings,

    /// ワークスペースのルートパス（相対パスの基準）
    workspace_root: PathBuf,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self { current_settings: ToolSettings::default(), workspace_root: workspace_root.into() }
    }

    /// 設定を読み込む
    ///
    /// 設定ファイルがなければデフォルト値を使う。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", self.workspace_root);

        // ワークスペースの設定を読み込み
        let settings = loader::load_from_workspace(&self.workspace_root)?.map_or_else(
            ToolSettings::default,
            |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            },
        );

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する（コマンドライン引数による上書き用）
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: ToolSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &ToolSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// 設定値のパスをワークスペースルート基準で解決する
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.workspace_root.join(path)
    }
}
