use std::collections::BTreeSet;

use crate::dictionary::ReferenceDictionary;

/// Outcome of comparing freshly extracted keys with the previous reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Keys new in this run, sorted.
    pub added: Vec<String>,
    /// Keys no longer found in the sources, sorted.
    pub removed: Vec<String>,
    /// The reference dictionary to persist.
    pub reference: ReferenceDictionary,
}

impl Reconciliation {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Compute `added` = new − old and `removed` = old − new, and the new reference.
#[must_use]
pub fn reconcile(extracted: &BTreeSet<String>, previous: &ReferenceDictionary) -> Reconciliation {
    let added = extracted.iter().filter(|key| !previous.contains(key)).cloned().collect();
    let removed = previous.keys().filter(|key| !extracted.contains(*key)).cloned().collect();
    let reference = ReferenceDictionary::from_keys(extracted.iter().cloned());

    Reconciliation { added, removed, reference }
}
