mod common;

use std::fs;
use std::path::Path;

use common::WikiforgeProcess;

fn scaffold_into(root: &Path) -> std::process::Output {
    WikiforgeProcess::spawn_command(&["scaffold", "--root", root.to_str().unwrap()])
}

/// A fresh run materializes every builtin topic with both artifacts.
#[test]
fn fresh_run_creates_all_topic_directories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");

    let output = scaffold_into(&root);
    assert!(
        output.status.success(),
        "scaffold should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let topic_dirs = fs::read_dir(&root).unwrap().count();
    assert_eq!(topic_dirs, 17, "builtin table has 17 topics");

    let caching = root.join("09-caching");
    assert!(caching.join("_category_.json").is_file());
    assert!(caching.join("00-syllabus.md").is_file());
    assert_eq!(fs::read_dir(&caching).unwrap().count(), 2);
}

/// Category metadata carries the exact key set Docusaurus expects.
#[test]
fn category_metadata_shape() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    assert!(scaffold_into(&root).status.success());

    let json = fs::read_to_string(root.join("09-caching/_category_.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["label"], "9. CACHING");
    assert_eq!(value["position"], 9);
    assert_eq!(value["collapsible"], true);
    assert_eq!(value["collapsed"], true);
    assert_eq!(value["link"]["type"], "generated-index");
    assert!(value["link"]["description"].as_str().unwrap().contains("9. CACHING"));
}

/// The placeholder embeds the syllabus verbatim under the fixed frontmatter.
#[test]
fn placeholder_content() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    assert!(scaffold_into(&root).status.success());

    let page = fs::read_to_string(root.join("09-caching/00-syllabus.md")).unwrap();
    assert!(page.starts_with("---\nsidebar_position: 1\ntitle: SYLLABUS\n---\n"));
    assert!(page.contains("# 9. CACHING"));
    assert!(page.contains("CACHE STRATEGIES"));
    assert!(page.contains("Work in progress"));
}

/// The two part-split topics land at their fixed positions.
#[test]
fn part_topics_have_override_positions() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    assert!(scaffold_into(&root).status.success());

    let part_a: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(root.join("system-design-part-a/_category_.json")).unwrap(),
    )
    .unwrap();
    let part_b: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(root.join("system-design-part-b/_category_.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(part_a["position"], 16);
    assert_eq!(part_b["position"], 17);
}

/// Running twice leaves the tree byte-for-byte identical.
#[test]
fn second_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    assert!(scaffold_into(&root).status.success());

    let category_before = fs::read_to_string(root.join("04-operating-systems/_category_.json")).unwrap();
    let placeholder_before = fs::read_to_string(root.join("04-operating-systems/00-syllabus.md")).unwrap();

    let output = scaffold_into(&root);
    assert!(
        output.status.success(),
        "second run should still exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        fs::read_to_string(root.join("04-operating-systems/_category_.json")).unwrap(),
        category_before
    );
    assert_eq!(
        fs::read_to_string(root.join("04-operating-systems/00-syllabus.md")).unwrap(),
        placeholder_before
    );
    assert_eq!(
        fs::read_dir(root.join("04-operating-systems")).unwrap().count(),
        2,
        "no duplicate artifacts on re-run"
    );
}

/// Author content in a topic directory is never replaced.
#[test]
fn authored_content_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    let caching = root.join("09-caching");
    fs::create_dir_all(&caching).unwrap();
    fs::write(caching.join("redis.md"), "# Hand-written Redis notes\n").unwrap();

    let output = scaffold_into(&root);
    assert!(output.status.success());

    assert!(
        !caching.join("00-syllabus.md").exists(),
        "placeholder must not be created next to authored content"
    );
    assert_eq!(
        fs::read_to_string(caching.join("redis.md")).unwrap(),
        "# Hand-written Redis notes\n",
        "authored file must be byte-for-byte unchanged"
    );
    // Metadata is still (re)written.
    let meta: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(caching.join("_category_.json")).unwrap())
            .unwrap();
    assert_eq!(meta["position"], 9);
}

/// Dry run reports the plan but writes nothing.
#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");

    let output = WikiforgeProcess::spawn_command(&[
        "scaffold",
        "--root",
        root.to_str().unwrap(),
        "--dry-run",
    ]);
    assert!(output.status.success());
    assert!(!root.exists(), "dry run must not create the docs root");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Dry run"),
        "dry run should be announced: {stderr}"
    );
}

/// An external YAML table feeds the same engine as the builtin table.
#[test]
fn external_topic_table() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    let table = dir.path().join("topics.yaml");
    fs::write(
        &table,
        "topics:\n  - slug: 01-rust\n    label: 1. RUST\n    syllabus: |\n      OWNERSHIP\n      BORROWING\n",
    )
    .unwrap();

    let output = WikiforgeProcess::spawn_command(&[
        "scaffold",
        "--root",
        root.to_str().unwrap(),
        "--topics",
        table.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "external table scaffold should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let meta: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(root.join("01-rust/_category_.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(meta["label"], "1. RUST");
    assert_eq!(meta["position"], 1);
    assert!(fs::read_to_string(root.join("01-rust/00-syllabus.md"))
        .unwrap()
        .contains("OWNERSHIP"));
}

/// An invalid table is rejected before anything touches the filesystem.
#[test]
fn invalid_table_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    let table = dir.path().join("topics.yaml");
    fs::write(
        &table,
        "topics:\n  - slug: dup\n    label: 1. A\n    syllabus: X\n  - slug: dup\n    label: 2. B\n    syllabus: Y\n",
    )
    .unwrap();

    let output = WikiforgeProcess::spawn_command(&[
        "scaffold",
        "--root",
        root.to_str().unwrap(),
        "--topics",
        table.to_str().unwrap(),
    ]);
    assert_eq!(
        output.status.code(),
        Some(2),
        "duplicate slug should exit with the config error code"
    );
    assert!(!root.exists(), "no directory may be created for an invalid table");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("duplicate slug"),
        "error should name the duplicate slug: {stderr}"
    );
}
