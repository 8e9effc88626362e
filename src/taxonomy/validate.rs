//! Topic table validation.
//!
//! Runs before any filesystem mutation: a malformed table indicates a
//! bug in the table itself, not an environmental failure, and must be
//! reported without touching the docs tree.

use std::collections::HashSet;

use crate::error::{ConfigError, Severity, ValidationIssue};
use crate::taxonomy::topic::TopicDefinition;

/// Characters never allowed in a slug.
const FORBIDDEN_SLUG_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Check whether a slug is a usable filesystem path segment.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && slug.trim() == slug
        && !slug.contains(FORBIDDEN_SLUG_CHARS)
        && !slug.chars().any(char::is_control)
}

/// Validate a topic table, returning every issue found.
///
/// Errors: empty or unsafe slugs, duplicate slugs, duplicate labels.
/// Warnings: topics that resolve to position 0 (unranked — almost always
/// a typo in the label of an external table).
#[must_use]
pub fn validate_table(topics: &[TopicDefinition]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_slugs: HashSet<&str> = HashSet::new();
    let mut seen_labels: HashSet<&str> = HashSet::new();

    for (idx, topic) in topics.iter().enumerate() {
        if !is_valid_slug(&topic.slug) {
            issues.push(ValidationIssue {
                path: format!("topics[{idx}].slug"),
                message: format!("invalid slug {:?}", topic.slug),
                severity: Severity::Error,
            });
        }

        if !seen_slugs.insert(&topic.slug) {
            issues.push(ValidationIssue {
                path: format!("topics[{idx}].slug"),
                message: format!("duplicate slug '{}'", topic.slug),
                severity: Severity::Error,
            });
        }

        if topic.label.trim().is_empty() {
            issues.push(ValidationIssue {
                path: format!("topics[{idx}].label"),
                message: "label is empty".to_string(),
                severity: Severity::Error,
            });
        } else if !seen_labels.insert(&topic.label) {
            issues.push(ValidationIssue {
                path: format!("topics[{idx}].label"),
                message: format!("duplicate label '{}'", topic.label),
                severity: Severity::Error,
            });
        }

        if topic.resolved_position() == 0 {
            issues.push(ValidationIssue {
                path: format!("topics[{idx}]"),
                message: format!("position is 0 (unranked) for '{}'", topic.slug),
                severity: Severity::Warning,
            });
        }
    }

    issues
}

/// Validate a table and convert blocking issues into a `ConfigError`.
///
/// Warnings are returned alongside `Ok` so callers can still surface them;
/// in strict mode they are promoted to errors.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` when the table contains at least
/// one error-severity issue (or any issue at all in strict mode).
pub fn check_table(
    topics: &[TopicDefinition],
    strict: bool,
) -> Result<Vec<ValidationIssue>, ConfigError> {
    let issues = validate_table(topics);
    let blocking = issues.iter().any(|i| i.severity == Severity::Error)
        || (strict && !issues.is_empty());

    if blocking {
        return Err(ConfigError::ValidationError { errors: issues });
    }

    Ok(issues)
}
