//! Validate command handler.

use crate::cli::args::ValidateArgs;
use crate::cli::commands::{check_and_report, resolve_topics};
use crate::error::WikiforgeError;

/// Execute `validate`.
///
/// Loads the topic table and reports every validation issue found,
/// without touching the docs tree.
///
/// # Errors
///
/// Returns a config error when the table fails to load or contains
/// blocking issues (any issue at all with `--strict`).
pub fn run(args: &ValidateArgs) -> Result<(), WikiforgeError> {
    eprintln!("Validating topic table...");

    let topics = resolve_topics(args.topics.as_deref())?;
    check_and_report(&topics, args.strict)?;

    eprintln!("Validation passed ({} topic(s))", topics.len());
    Ok(())
}
