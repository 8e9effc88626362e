//! Topic record shared by the builtin table and external YAML tables.

use serde::{Deserialize, Serialize};

use crate::taxonomy::position;

/// One entry in the wiki taxonomy.
///
/// Each topic becomes one documentation directory under the docs root,
/// carrying a `_category_.json` sidebar file and (when the directory has
/// no authored content yet) a placeholder syllabus page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDefinition {
    /// Directory name under the docs root. Must be a valid, unique
    /// path segment.
    pub slug: String,

    /// Display heading, also used as the sidebar label. Unique per topic.
    pub label: String,

    /// Sidebar sort order. Optional in external tables; when omitted it
    /// is derived from the slug/label via [`position::derive`].
    #[serde(default)]
    pub position: Option<u32>,

    /// Free-text syllabus block, embedded verbatim into the placeholder
    /// page.
    pub syllabus: String,
}

impl TopicDefinition {
    /// Resolved sidebar position.
    ///
    /// An explicit `position` field always wins; otherwise falls back to
    /// derivation from slug override / label prefix (0 when neither
    /// applies).
    #[must_use]
    pub fn resolved_position(&self) -> u32 {
        self.position
            .unwrap_or_else(|| position::derive(&self.slug, &self.label))
    }
}
