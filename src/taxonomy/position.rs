//! Sidebar position derivation for topics without an explicit position.
//!
//! Used only for external topic tables that omit the `position` field;
//! the builtin table carries explicit positions throughout.

use std::sync::OnceLock;

use regex::Regex;

/// Fixed positions for the two part-split topics whose labels carry no
/// numeric prefix. The override is checked first and always wins, even
/// when the label would parse.
const SLUG_OVERRIDES: &[(&str, u32)] = &[
    ("system-design-part-a", 16),
    ("system-design-part-b", 17),
];

fn leading_int_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+)\.").expect("leading-integer regex is valid"))
}

/// Derive a sidebar position from a topic's slug and label.
///
/// Resolution order:
/// 1. slug override table (the two "PART A" / "PART B" topics → 16, 17);
/// 2. leading integer in the label (`"3. SPRING BOOT INTERNALS"` → 3);
/// 3. `0` — unranked, sorts before everything but is not an error.
#[must_use]
pub fn derive(slug: &str, label: &str) -> u32 {
    if let Some(&(_, pos)) = SLUG_OVERRIDES.iter().find(|(s, _)| *s == slug) {
        return pos;
    }

    leading_int_re()
        .captures(label)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Whether a slug belongs to the fixed-position override table.
#[must_use]
pub fn has_override(slug: &str) -> bool {
    SLUG_OVERRIDES.iter().any(|(s, _)| *s == slug)
}
