//! String synchronizer: Extract → Reconcile → Prune.
/// Missing translation report
pub mod missing;
/// Full synchronization run
pub mod pipeline;
/// Stale key removal from locale dictionaries
pub mod prune;
/// Old/new key set comparison
pub mod reconcile;
/// Console report rendering
pub mod report;

pub use missing::{
    MissingReport,
    find_missing_translations,
};
pub use pipeline::{
    SyncError,
    SyncSummary,
    run_sync,
};
pub use prune::{
    PruneOutcome,
    prune_locales,
};
pub use reconcile::{
    Reconciliation,
    reconcile,
};
pub use report::{
    write_missing_reports,
    write_sync_summary,
};
