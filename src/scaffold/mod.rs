//! Scaffold engine: materializes the topic taxonomy into a docs tree.
//!
//! Each topic maps to a disjoint directory under the docs root, so
//! iteration order never affects final state and a re-run reproduces the
//! same tree. The only destructive-looking write is the category file,
//! which is fully derived and therefore safe to regenerate; author
//! content is protected by the document-extension check.

pub mod category;
pub mod placeholder;

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::WikiforgeError;
use crate::scaffold::category::CategoryMetadata;
use crate::scaffold::placeholder::{PLACEHOLDER_FILENAME, generate_placeholder};
use crate::taxonomy::TopicDefinition;

/// Fixed filename for the sidebar metadata artifact.
pub const CATEGORY_FILENAME: &str = "_category_.json";

/// Extensions that count as author document content. A directory holding
/// at least one such file never receives a placeholder.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// What happened to one topic during a scaffold run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOutcome {
    /// Directory and category file ensured, placeholder written.
    PlaceholderWritten,
    /// Directory and category file ensured, placeholder skipped because
    /// the directory already holds document content.
    SkippedExisting,
}

/// Aggregate result of a scaffold run.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Topics whose directory and category file were ensured.
    pub scaffolded: usize,
    /// Topics that received a new placeholder page.
    pub placeholders_written: usize,
    /// Topics whose placeholder was skipped due to existing content.
    pub skipped_existing: usize,
    /// Topics that failed, with the error message.
    pub failed: Vec<(String, String)>,
}

impl ScaffoldReport {
    /// Whether every topic scaffolded cleanly.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Whether a directory already contains author document files.
fn has_document_files(dir: &Path) -> io::Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_document = path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
        if is_document {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Ensure one topic's directory, category file, and placeholder.
///
/// The directory is created if missing (parents included), the category
/// file is unconditionally rewritten, and the placeholder is written only
/// when the directory holds no document files yet.
///
/// # Errors
///
/// Returns an error when directory creation or a file write fails.
/// Failures here are isolated per topic by [`scaffold_all`].
pub fn ensure_topic_directory(
    root: &Path,
    topic: &TopicDefinition,
) -> Result<TopicOutcome, WikiforgeError> {
    let dir = root.join(&topic.slug);
    fs::create_dir_all(&dir)?;

    let metadata = CategoryMetadata::for_topic(topic);
    fs::write(dir.join(CATEGORY_FILENAME), metadata.to_json()?)?;
    debug!(slug = %topic.slug, position = metadata.position, "category file written");

    if has_document_files(&dir)? {
        info!(slug = %topic.slug, "existing content found, placeholder skipped");
        return Ok(TopicOutcome::SkippedExisting);
    }

    fs::write(dir.join(PLACEHOLDER_FILENAME), generate_placeholder(topic))?;
    info!(slug = %topic.slug, "placeholder written");
    Ok(TopicOutcome::PlaceholderWritten)
}

/// Report what [`ensure_topic_directory`] would do, without writing.
fn plan_topic_directory(root: &Path, topic: &TopicDefinition) -> Result<TopicOutcome, WikiforgeError> {
    let dir = root.join(&topic.slug);
    if has_document_files(&dir)? {
        Ok(TopicOutcome::SkippedExisting)
    } else {
        Ok(TopicOutcome::PlaceholderWritten)
    }
}

/// Scaffold every topic in list order.
///
/// Per-topic error isolation: a filesystem failure for one topic is
/// recorded in the report and logged, and the remaining topics still run.
/// With `dry_run` set, nothing is written and the report reflects what a
/// real run would do.
#[must_use]
pub fn scaffold_all(root: &Path, topics: &[TopicDefinition], dry_run: bool) -> ScaffoldReport {
    let mut report = ScaffoldReport::default();

    for topic in topics {
        let result = if dry_run {
            plan_topic_directory(root, topic)
        } else {
            ensure_topic_directory(root, topic)
        };

        match result {
            Ok(TopicOutcome::PlaceholderWritten) => {
                report.scaffolded += 1;
                report.placeholders_written += 1;
            }
            Ok(TopicOutcome::SkippedExisting) => {
                report.scaffolded += 1;
                report.skipped_existing += 1;
            }
            Err(e) => {
                warn!(slug = %topic.slug, error = %e, "topic scaffold failed");
                report.failed.push((topic.slug.clone(), e.to_string()));
            }
        }
    }

    report
}
