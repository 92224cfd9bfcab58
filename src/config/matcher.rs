//! File pattern matcher for source and locale files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::I18nSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files under a root directory against include/exclude glob patterns.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    root: PathBuf,
    include_set: GlobSet,
    exclude_set: GlobSet,
}

impl FileMatcher {
    /// Creates a matcher from raw patterns, relative to `root`.
    pub fn new(
        root: PathBuf,
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self, MatcherError> {
        let include_set = Self::build_glob_set(include_patterns, |pattern, source| {
            MatcherError::InvalidIncludePattern { pattern, source }
        })?;

        let exclude_set = Self::build_glob_set(exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { root, include_set, exclude_set })
    }

    /// Matcher for files scanned for translatable literals.
    pub fn for_sources(root: PathBuf, settings: &I18nSettings) -> Result<Self, MatcherError> {
        Self::new(root, &settings.include_patterns, &settings.exclude_patterns)
    }

    /// Matcher for locale dictionaries.
    pub fn for_locales(root: PathBuf, settings: &I18nSettings) -> Result<Self, MatcherError> {
        Self::new(root, &settings.locale_patterns, &[])
    }

    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if the path matches an include pattern but no exclude pattern.
    ///
    /// Paths outside the root never match.
    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        let Some(relative_path) = path.strip_prefix(&self.root).ok() else {
            return false;
        };

        self.is_match_relative(relative_path)
    }

    /// Same as [`Self::is_match`] for a path already relative to the root.
    #[must_use]
    pub fn is_match_relative(&self, relative_path: &Path) -> bool {
        self.include_set.is_match(relative_path) && !self.exclude_set.is_match(relative_path)
    }
}
