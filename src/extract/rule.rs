//! Marker rule: a quoted string literal followed by the marker token.
//!
//! ```text
//! "Save".i18n
//! 'Cancel'
//!     .i18n
//! ```
//!
//! Literals are lexed left to right first, so a marker is only ever checked
//! right after a complete literal. Text between two literals is never read as
//! a literal itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::types::ExtractError;

/// Single- or double-quoted literal on one line; backslash escapes included.
#[allow(clippy::expect_used)]
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\\r\n]|\\.)*)"|'((?:[^'\\\r\n]|\\.)*)'"#)
        .expect("string literal pattern is valid")
});

/// Matches translatable literals in source text.
#[derive(Debug, Clone)]
pub struct MarkerRule {
    marker: String,
    /// Anchored at the end of a literal: optional whitespace, then the marker.
    suffix: Regex,
}

impl MarkerRule {
    /// Builds the rule for `marker` (e.g. `.i18n`).
    ///
    /// When the marker ends with an identifier character, the character after it
    /// must not be one, so `.i18n` does not match `.i18nKey`.
    pub fn new(marker: &str) -> Result<Self, ExtractError> {
        let boundary =
            if marker.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_') {
                r"\b"
            } else {
                ""
            };
        let pattern = format!(r"\A\s*{}{boundary}", regex::escape(marker));

        let suffix = Regex::new(&pattern).map_err(|source| ExtractError::InvalidMarker {
            marker: marker.to_string(),
            source,
        })?;

        Ok(Self { marker: marker.to_string(), suffix })
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns the content of every marked literal in `text`, in order of appearance.
    ///
    /// Content is returned as written between the quotes; escape sequences are not
    /// decoded.
    pub fn keys<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        STRING_LITERAL.captures_iter(text).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let rest = text.get(whole.end()..)?;
            if !self.suffix.is_match(rest) {
                return None;
            }
            caps.get(1).or_else(|| caps.get(2)).map(|content| content.as_str())
        })
    }
}
