use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Name of the optional configuration file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".release-tools.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "i18n.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSettings {
    pub i18n: I18nSettings,
    pub release: ReleaseSettings,
}

/// Settings for the translation string synchronizer.
///
/// Relative paths are resolved against the workspace root.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Directory scanned for translatable literals.
    pub source_root: String,
    /// Reference dictionary (default-locale identity mapping).
    pub reference_file: String,
    /// Directory holding the locale dictionaries.
    pub locale_dir: String,

    /// Token that flags the preceding string literal as translatable.
    pub marker: String,

    /// Globs relative to `source_root`.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    /// Globs relative to `locale_dir`.
    pub locale_patterns: Vec<String>,

    pub respect_gitignore: bool,

    /// Write the reference dictionary even when no key was extracted.
    ///
    /// Off by default: an empty extraction usually means `source_root` is wrong,
    /// and writing would wipe every locale on the following prune.
    pub allow_empty: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            source_root: "lib".to_string(),
            reference_file: "assets/locales/en_US.json".to_string(),
            locale_dir: "assets/locales".to_string(),
            marker: ".i18n".to_string(),
            include_patterns: vec!["**/*".to_string()],
            exclude_patterns: Vec::new(),
            locale_patterns: vec!["**/*.json".to_string()],
            respect_gitignore: false,
            allow_empty: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseSettings {
    /// Build manifest carrying the `version: <name>+<code>` line.
    pub manifest_file: String,
    /// Per-build changelogs, one `<code>.txt` per release (F-Droid layout).
    pub changelog_dir: String,
    /// Changelog of the latest release (Play Store upload action).
    pub whats_new_file: String,
    pub blog_dir: String,
    pub app_name: String,
    pub repository_url: String,
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            manifest_file: "pubspec.yaml".to_string(),
            changelog_dir: "metadata/en-US/changelogs".to_string(),
            whats_new_file: "metadata/en-US/whatsnew-en-US".to_string(),
            blog_dir: "website/src/content/blog".to_string(),
            app_name: "Oinkoin".to_string(),
            repository_url: "https://github.com/emavgl/oinkoin".to_string(),
        }
    }
}

fn require_non_empty(errors: &mut Vec<ValidationError>, field_path: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(
            field_path,
            "The value cannot be empty. Please specify a path or remove this field",
        ));
    }
}

fn validate_globs(errors: &mut Vec<ValidationError>, field_path: &str, patterns: &[String]) {
    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field_path}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        require_non_empty(&mut errors, "i18n.sourceRoot", &self.source_root);
        require_non_empty(&mut errors, "i18n.referenceFile", &self.reference_file);
        require_non_empty(&mut errors, "i18n.localeDir", &self.locale_dir);

        if self.marker.trim().is_empty() {
            errors.push(ValidationError::new(
                "i18n.marker",
                "The marker cannot be empty. Example: \".i18n\"",
            ));
        }

        if self.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "i18n.includePatterns",
                "At least one pattern is required. Example: [\"**/*.dart\"]",
            ));
        }
        validate_globs(&mut errors, "i18n.includePatterns", &self.include_patterns);
        validate_globs(&mut errors, "i18n.excludePatterns", &self.exclude_patterns);

        if self.locale_patterns.is_empty() {
            errors.push(ValidationError::new(
                "i18n.localePatterns",
                "At least one pattern is required. Example: [\"**/*.json\"]",
            ));
        }
        validate_globs(&mut errors, "i18n.localePatterns", &self.locale_patterns);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl ReleaseSettings {
    /// # Errors
    /// - Required field is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        require_non_empty(&mut errors, "release.manifestFile", &self.manifest_file);
        require_non_empty(&mut errors, "release.changelogDir", &self.changelog_dir);
        require_non_empty(&mut errors, "release.whatsNewFile", &self.whats_new_file);
        require_non_empty(&mut errors, "release.blogDir", &self.blog_dir);

        if self.app_name.trim().is_empty() {
            errors.push(ValidationError::new("release.appName", "The app name cannot be empty"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl ToolSettings {
    /// Validates every section and reports all problems at once.
    ///
    /// # Errors
    /// See [`I18nSettings::validate`] and [`ReleaseSettings::validate`].
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.i18n.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.release.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = ToolSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"i18n": {"sourceRoot": "app/lib", "allowEmpty": true}}"#;

        let settings: ToolSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.i18n.source_root, eq("app/lib"));
        assert_that!(settings.i18n.allow_empty, eq(true));
        assert_that!(settings.i18n.marker, eq(".i18n"));
        assert_that!(settings.release.manifest_file, eq("pubspec.yaml"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: ToolSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.i18n.source_root, eq("lib"));
        assert_that!(settings.i18n.reference_file, eq("assets/locales/en_US.json"));
        assert_that!(settings.i18n.include_patterns, elements_are![eq("**/*")]);
        assert_that!(settings.i18n.exclude_patterns, is_empty());
        assert_that!(settings.i18n.locale_patterns, elements_are![eq("**/*.json")]);
        assert_that!(settings.release.changelog_dir, eq("metadata/en-US/changelogs"));
        assert_that!(settings.release.blog_dir, eq("website/src/content/blog"));
    }

    #[rstest]
    fn validate_invalid_marker_empty() {
        let settings = I18nSettings { marker: String::new(), ..I18nSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("i18n.marker")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = I18nSettings { include_patterns: vec![], ..I18nSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("i18n.includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = I18nSettings {
            exclude_patterns: vec!["**/*.g.dart".to_string(), "invalid[pattern".to_string()],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("i18n.excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_locale_pattern_invalid_glob() {
        let settings = I18nSettings {
            locale_patterns: vec!["**/*.{json".to_string()],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("i18n.localePatterns[0]"))])
        );
    }

    #[rstest]
    fn validate_release_empty_paths() {
        let settings = ReleaseSettings {
            manifest_file: String::new(),
            blog_dir: "  ".to_string(),
            ..ReleaseSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![
                field!(ValidationError.field_path, eq("release.manifestFile")),
                field!(ValidationError.field_path, eq("release.blogDir"))
            ])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = ToolSettings {
            i18n: I18nSettings {
                source_root: String::new(),
                include_patterns: vec![],
                ..I18nSettings::default()
            },
            ..ToolSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. i18n.sourceRoot"));
        assert_that!(error_message, contains_substring("cannot be empty"));
        assert_that!(error_message, contains_substring("2. i18n.includePatterns"));
        assert_that!(error_message, contains_substring("At least one pattern"));
    }
}
