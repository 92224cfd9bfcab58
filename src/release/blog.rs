//! リリース告知ブログ記事の生成

use std::path::{
    Path,
    PathBuf,
};

use chrono::NaiveDate;

use crate::config::{
    ConfigManager,
    ReleaseSettings,
};
use crate::release::changelog::read_changelog;
use crate::release::error::ReleaseError;
use crate::release::version::validate_version_name;

/// Rendered blog post and where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub path: PathBuf,
    pub content: String,
}

/// `1.4.2` → `release-1-4-2.md`
#[must_use]
pub fn blog_post_file_name(version: &str) -> String {
    format!("release-{}.md", version.replace('.', "-"))
}

/// ブログ記事の本文を生成する
///
/// 変更履歴は前後の空白を取り除いて `## What's New` に埋め込む。
#[must_use]
pub fn render_blog_post(
    settings: &ReleaseSettings,
    version: &str,
    changelog: &str,
    date: NaiveDate,
) -> String {
    let app = &settings.app_name;
    format!(
        "---\n\
         title: 'Release {version}'\n\
         description: '{app} version {version} is now available with new features and improvements.'\n\
         pubDate: {date}\n\
         ---\n\
         \n\
         We're excited to announce the release of {app} version **{version}**! \
         This update brings several improvements and new features to enhance your experience.\n\
         \n\
         ## What's New\n\
         \n\
         {changelog}\n\
         \n\
         Thank you for using {app}! If you encounter any issues or have suggestions for future updates, \
         please don't hesitate to reach out through our [GitHub repository]({url}).\n",
        date = date.format("%Y-%m-%d"),
        changelog = changelog.trim(),
        url = settings.repository_url,
    )
}

/// リリース告知記事を `blogDir` に書き出す
///
/// # Errors
/// - バージョン名が不正
/// - 変更履歴の読み込みエラー
/// - 記事の書き込みエラー
pub fn create_blog_post(
    config: &ConfigManager,
    version: &str,
    changelog_path: &Path,
    date: NaiveDate,
) -> Result<BlogPost, ReleaseError> {
    validate_version_name(version)?;

    let settings = &config.get_settings().release;
    let changelog = read_changelog(changelog_path)?;
    let content = render_blog_post(settings, version, &changelog, date);

    let blog_dir = config.resolve(&settings.blog_dir);
    std::fs::create_dir_all(&blog_dir)
        .map_err(|source| ReleaseError::Write { path: blog_dir.clone(), source })?;
    let path = blog_dir.join(blog_post_file_name(version));
    std::fs::write(&path, &content)
        .map_err(|source| ReleaseError::Write { path: path.clone(), source })?;
    tracing::info!("Blog post created: {}", path.display());

    Ok(BlogPost { path, content })
}
