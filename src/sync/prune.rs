use std::path::PathBuf;

use crate::dictionary::{
    DictionaryError,
    LocaleDictionary,
    ReferenceDictionary,
};

/// What happened to one locale file during pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    pub path: PathBuf,
    /// Keys removed from the file, sorted. Empty means the file was not written.
    pub removed: Vec<String>,
}

impl PruneOutcome {
    #[must_use]
    pub fn was_rewritten(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Remove every key the reference does not know from each locale.
///
/// Locales without stale keys are left untouched on disk.
///
/// # Errors
/// Returns error if a locale file cannot be edited or written.
pub fn prune_locales(
    locales: &mut [LocaleDictionary],
    reference: &ReferenceDictionary,
) -> Result<Vec<PruneOutcome>, DictionaryError> {
    locales.iter_mut().map(|locale| prune_locale(locale, reference)).collect()
}

fn prune_locale(
    locale: &mut LocaleDictionary,
    reference: &ReferenceDictionary,
) -> Result<PruneOutcome, DictionaryError> {
    let stale = locale.stale_keys(reference);

    let removed = if stale.is_empty() {
        Vec::new()
    } else {
        tracing::debug!(path = %locale.path().display(), count = stale.len(), "Pruning stale keys");
        locale.remove_keys(&stale)?
    };

    Ok(PruneOutcome { path: locale.path().to_path_buf(), removed })
}
