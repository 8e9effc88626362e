//! External topic table loading.
//!
//! The scaffold engine is source-agnostic: a YAML table loaded here feeds
//! the same path as the builtin table.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::taxonomy::topic::TopicDefinition;

/// Top-level shape of a topic table file.
#[derive(Debug, Deserialize)]
struct TopicTableFile {
    topics: Vec<TopicDefinition>,
}

/// Load a topic table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError::MissingFile` when the path does not exist,
/// `ConfigError::ParseError` for unreadable or malformed YAML, and
/// `ConfigError::EmptyTable` when the file parses but lists no topics.
pub fn load_topics(path: &Path) -> Result<Vec<TopicDefinition>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let table: TopicTableFile =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if table.topics.is_empty() {
        return Err(ConfigError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    Ok(table.topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_well_formed_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topics.yaml");
        fs::write(
            &path,
            "topics:\n  - slug: 09-caching\n    label: 9. CACHING\n    syllabus: |\n      CACHE STRATEGIES\n      EVICTION POLICIES\n  - slug: system-design-part-a\n    label: SYSTEM DESIGN - PART A\n    position: 16\n    syllabus: SCALABILITY BASICS\n",
        )
        .unwrap();

        let topics = load_topics(&path).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].resolved_position(), 9);
        assert_eq!(topics[1].resolved_position(), 16);
        assert!(topics[0].syllabus.contains("CACHE STRATEGIES"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_topics(Path::new("/nonexistent/topics.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "topics: [unclosed").unwrap();

        let err = load_topics(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "topics: []\n").unwrap();

        let err = load_topics(&path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTable { .. }));
    }
}
