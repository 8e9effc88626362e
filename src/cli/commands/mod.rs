//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod list;
pub mod scaffold;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::error::{ConfigError, ValidationIssue, WikiforgeError};
use crate::taxonomy::{TopicDefinition, builtin, file, validate as taxonomy_validate};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), WikiforgeError> {
    match cli.command {
        Commands::Scaffold(args) => scaffold::run(&args),
        Commands::Validate(args) => validate::run(&args),
        Commands::List(args) => list::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// Resolve the topic source shared by `scaffold`, `validate`, and `list`:
/// an external YAML table when `--topics` is given, the builtin table
/// otherwise.
pub(crate) fn resolve_topics(
    topics_file: Option<&Path>,
) -> Result<Vec<TopicDefinition>, WikiforgeError> {
    match topics_file {
        Some(path) => Ok(file::load_topics(path)?),
        None => Ok(builtin::topics()),
    }
}

/// Validate a topic table and print every issue to stderr.
///
/// Returns the non-blocking warnings on success; blocking issues are
/// printed and converted into the config error.
pub(crate) fn check_and_report(
    topics: &[TopicDefinition],
    strict: bool,
) -> Result<Vec<ValidationIssue>, WikiforgeError> {
    match taxonomy_validate::check_table(topics, strict) {
        Ok(warnings) => {
            for warning in &warnings {
                eprintln!("{warning}");
            }
            Ok(warnings)
        }
        Err(e) => {
            if let ConfigError::ValidationError { ref errors } = e {
                for issue in errors {
                    eprintln!("{issue}");
                }
            }
            Err(e.into())
        }
    }
}
