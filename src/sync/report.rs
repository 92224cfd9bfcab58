//! Human-readable console output for `sync` and `missing`.
//!
//! The format is meant for the operator reading the terminal; nothing parses it.

use std::io::{
    self,
    Write,
};

use crate::sync::missing::MissingReport;
use crate::sync::pipeline::SyncSummary;

fn write_key_list<W: Write>(out: &mut W, title: &str, keys: &[String]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for key in keys {
        writeln!(out, " - {key}")?;
    }
    Ok(())
}

/// Render the result of a synchronization run.
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn write_sync_summary<W: Write>(out: &mut W, summary: &SyncSummary) -> io::Result<()> {
    let reconciliation = &summary.reconciliation;
    let reference_path = summary.reference_path.display();

    if !reconciliation.removed.is_empty() {
        write_key_list(
            out,
            &format!("Keys removed from {reference_path}:"),
            &reconciliation.removed,
        )?;
    }
    if !reconciliation.added.is_empty() {
        write_key_list(out, &format!("Keys added to {reference_path}:"), &reconciliation.added)?;
    }
    if !reconciliation.has_changes() {
        writeln!(out, "No changes to {reference_path}.")?;
    }

    let skipped = summary.extraction.skipped.len();
    writeln!(
        out,
        "\nFound {} unique translation strings in {} files.",
        reconciliation.reference.len(),
        summary.extraction.scanned_files
    )?;
    if skipped > 0 {
        writeln!(out, "Skipped {skipped} unreadable files (see warnings above).")?;
    }
    writeln!(out, "Strings written to {reference_path}")?;

    for outcome in &summary.pruned {
        writeln!(out, "\nProcessing file: {}", outcome.path.display())?;
        if outcome.was_rewritten() {
            write_key_list(out, "Keys being deleted:", &outcome.removed)?;
        } else {
            writeln!(out, "No keys to delete.")?;
        }
    }

    Ok(())
}

/// Render the missing translation report.
///
/// # Errors
/// Returns error if writing to `out` fails.
pub fn write_missing_reports<W: Write>(out: &mut W, reports: &[MissingReport]) -> io::Result<()> {
    if reports.is_empty() {
        writeln!(out, "No locale files found.")?;
        return Ok(());
    }

    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{}: {}/{} translated",
            report.path.display(),
            report.translated(),
            report.total
        )?;
        for key in &report.missing {
            writeln!(out, " - {key}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use googletest::prelude::*;

    use super::*;
    use crate::dictionary::ReferenceDictionary;
    use crate::extract::Extraction;
    use crate::sync::prune::PruneOutcome;
    use crate::sync::reconcile::Reconciliation;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn summary(added: &[&str], removed: &[&str], pruned: Vec<PruneOutcome>) -> SyncSummary {
        let keys: BTreeSet<String> = added.iter().copied().map(String::from).collect();
        SyncSummary {
            extraction: Extraction { keys: keys.clone(), scanned_files: 4, skipped: Vec::new() },
            reconciliation: Reconciliation {
                added: added.iter().copied().map(String::from).collect(),
                removed: removed.iter().copied().map(String::from).collect(),
                reference: ReferenceDictionary::from_keys(keys),
            },
            reference_path: PathBuf::from("assets/locales/en_US.json"),
            pruned,
        }
    }

    #[googletest::test]
    fn test_sync_summary_lists_changes() {
        let summary = summary(
            &["Cancel", "Save"],
            &["Delete"],
            vec![
                PruneOutcome {
                    path: PathBuf::from("assets/locales/fr_FR.json"),
                    removed: vec!["Delete".to_string()],
                },
                PruneOutcome { path: PathBuf::from("assets/locales/it_IT.json"), removed: vec![] },
            ],
        );

        let text = render(|out| write_sync_summary(out, &summary));

        expect_that!(
            text,
            eq("Keys removed from assets/locales/en_US.json:\n - Delete\n\
                Keys added to assets/locales/en_US.json:\n - Cancel\n - Save\n\
                \nFound 2 unique translation strings in 4 files.\n\
                Strings written to assets/locales/en_US.json\n\
                \nProcessing file: assets/locales/fr_FR.json\nKeys being deleted:\n - Delete\n\
                \nProcessing file: assets/locales/it_IT.json\nNo keys to delete.\n")
        );
    }

    #[googletest::test]
    fn test_sync_summary_without_changes() {
        let mut summary = summary(&[], &[], Vec::new());
        summary.extraction.skipped.push(crate::extract::SkippedFile {
            path: PathBuf::from("lib/logo.png"),
            reason: "stream did not contain valid UTF-8".to_string(),
        });

        let text = render(|out| write_sync_summary(out, &summary));

        expect_that!(text, starts_with("No changes to assets/locales/en_US.json.\n"));
        expect_that!(text, contains_substring("Skipped 1 unreadable files"));
    }

    #[googletest::test]
    fn test_missing_reports() {
        let reports = vec![
            MissingReport {
                path: PathBuf::from("assets/locales/it_IT.json"),
                missing: vec!["Cancel".to_string()],
                total: 3,
            },
            MissingReport { path: PathBuf::from("assets/locales/pt_BR.json"), missing: vec![], total: 3 },
        ];

        let text = render(|out| write_missing_reports(out, &reports));

        expect_that!(
            text,
            eq("assets/locales/it_IT.json: 2/3 translated\n - Cancel\n\
                \nassets/locales/pt_BR.json: 3/3 translated\n")
        );
    }

    #[googletest::test]
    fn test_missing_reports_empty() {
        let text = render(|out| write_missing_reports(out, &[]));

        expect_that!(text, eq("No locale files found.\n"));
    }
}
