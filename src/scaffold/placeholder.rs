//! Placeholder syllabus page generation.
//!
//! Assembles frontmatter, the topic heading, the syllabus block, and a
//! status line into a complete Markdown page.

use crate::taxonomy::TopicDefinition;

/// Fixed filename for the placeholder page. Sorts before any
/// author-added content in the directory.
pub const PLACEHOLDER_FILENAME: &str = "00-syllabus.md";

/// Fixed frontmatter title for every placeholder page.
const PLACEHOLDER_TITLE: &str = "SYLLABUS";

/// Status line appended to every placeholder page.
const STATUS_LINE: &str = "> 🚧 Work in progress.";

/// Generate a complete placeholder page for a topic.
///
/// The syllabus body is embedded verbatim inside a fenced text block so
/// that Markdown-significant characters in it stay literal.
#[must_use]
pub fn generate_placeholder(topic: &TopicDefinition) -> String {
    let mut lines = Vec::new();

    lines.push("---".to_string());
    lines.push("sidebar_position: 1".to_string());
    lines.push(format!("title: {PLACEHOLDER_TITLE}"));
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!("# {}", topic.label));
    lines.push(String::new());
    lines.push("```text".to_string());
    lines.push(topic.syllabus.clone());
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push(STATUS_LINE.to_string());
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic() -> TopicDefinition {
        TopicDefinition {
            slug: "09-caching".to_string(),
            label: "9. CACHING".to_string(),
            position: Some(9),
            syllabus: "CACHE STRATEGIES\nEVICTION POLICIES (LRU, LFU, TTL)".to_string(),
        }
    }

    #[test]
    fn page_starts_with_frontmatter() {
        let page = generate_placeholder(&topic());
        assert!(page.starts_with("---\nsidebar_position: 1\ntitle: SYLLABUS\n---\n"));
    }

    #[test]
    fn page_contains_heading_and_body() {
        let page = generate_placeholder(&topic());
        assert!(page.contains("# 9. CACHING"));
        assert!(page.contains("CACHE STRATEGIES\nEVICTION POLICIES (LRU, LFU, TTL)"));
    }

    #[test]
    fn body_is_fenced() {
        let page = generate_placeholder(&topic());
        let fence_start = page.find("```text").unwrap();
        let body_at = page.find("CACHE STRATEGIES").unwrap();
        let fence_end = page.rfind("```").unwrap();
        assert!(fence_start < body_at && body_at < fence_end);
    }

    #[test]
    fn page_ends_with_status_line() {
        let page = generate_placeholder(&topic());
        assert!(page.trim_end().ends_with("> 🚧 Work in progress."));
        assert!(page.ends_with('\n'));
    }

    #[test]
    fn frontmatter_has_no_description() {
        let page = generate_placeholder(&topic());
        let frontmatter = page.split("---").nth(1).unwrap();
        assert!(!frontmatter.contains("description"));
    }

    #[test]
    fn markdown_in_syllabus_stays_literal() {
        let mut t = topic();
        t.syllabus = "# NOT A HEADING\n* NOT A LIST".to_string();
        let page = generate_placeholder(&t);
        assert!(page.contains("```text\n# NOT A HEADING\n* NOT A LIST\n```"));
    }
}
