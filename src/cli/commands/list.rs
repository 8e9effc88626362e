//! List command handler.

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::resolve_topics;
use crate::error::WikiforgeError;
use crate::taxonomy::TopicDefinition;

/// One row of `list --format json` output.
#[derive(Serialize)]
struct ListEntry<'a> {
    slug: &'a str,
    label: &'a str,
    position: u32,
}

/// Execute `list`.
///
/// Prints each topic with its resolved sidebar position, in position
/// order, to stdout.
///
/// # Errors
///
/// Returns an error when the topic table fails to load or JSON output
/// fails to serialize.
pub fn run(args: &ListArgs) -> Result<(), WikiforgeError> {
    let mut topics = resolve_topics(args.topics.as_deref())?;
    topics.sort_by_key(TopicDefinition::resolved_position);

    match args.format {
        OutputFormat::Human => {
            for topic in &topics {
                println!(
                    "{:>3}  {:<28} {}",
                    topic.resolved_position(),
                    topic.slug,
                    topic.label
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<ListEntry<'_>> = topics
                .iter()
                .map(|t| ListEntry {
                    slug: &t.slug,
                    label: &t.label,
                    position: t.resolved_position(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
