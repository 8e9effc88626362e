//! Scaffold command handler.

use crate::cli::args::ScaffoldArgs;
use crate::cli::commands::{check_and_report, resolve_topics};
use crate::error::WikiforgeError;
use crate::scaffold::scaffold_all;

/// Execute `scaffold`.
///
/// Validates the topic table before any filesystem mutation, then
/// scaffolds each topic in list order with per-topic error isolation.
///
/// # Errors
///
/// Returns a config error for an invalid topic table, or an I/O-coded
/// error when one or more topics failed to scaffold.
pub fn run(args: &ScaffoldArgs) -> Result<(), WikiforgeError> {
    let topics = resolve_topics(args.topics.as_deref())?;
    check_and_report(&topics, false)?;

    if args.dry_run {
        eprintln!("Dry run: no files will be written");
    }
    eprintln!("Scaffolding {} topic(s) into {}", topics.len(), args.root.display());

    let report = scaffold_all(&args.root, &topics, args.dry_run);

    for (slug, message) in &report.failed {
        eprintln!("ERROR: {slug}: {message}");
    }
    eprintln!(
        "Scaffolded {} topic(s): {} placeholder(s) written, {} skipped (existing content), {} failed",
        report.scaffolded,
        report.placeholders_written,
        report.skipped_existing,
        report.failed.len()
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(WikiforgeError::PartialScaffold {
            failed: report.failed.len(),
            total: topics.len(),
        })
    }
}
