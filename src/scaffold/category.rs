//! `_category_.json` sidebar metadata generation.
//!
//! Docusaurus reads this file to label and order a docs directory in the
//! sidebar, so the key set must match what it expects exactly.

use serde::{Deserialize, Serialize};

use crate::taxonomy::TopicDefinition;

/// Sidebar metadata for one topic directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetadata {
    /// Sidebar display label.
    pub label: String,
    /// Sidebar sort order.
    pub position: u32,
    /// Whether the category can be collapsed.
    pub collapsible: bool,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Category index page directive.
    pub link: CategoryLink,
}

/// The `link` object inside `_category_.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLink {
    /// Link type; always the generated-index directive.
    #[serde(rename = "type")]
    pub link_type: String,
    /// Description shown on the generated index page.
    pub description: String,
}

impl CategoryMetadata {
    /// Build the sidebar metadata for a topic.
    #[must_use]
    pub fn for_topic(topic: &TopicDefinition) -> Self {
        Self {
            label: topic.label.clone(),
            position: topic.resolved_position(),
            collapsible: true,
            collapsed: true,
            link: CategoryLink {
                link_type: "generated-index".to_string(),
                description: format!("Notes and interview prep for {}", topic.label),
            },
        }
    }

    /// Render to the on-disk JSON form (pretty-printed, trailing newline).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
