//! `wikiforge` — taxonomy scaffolder for a Docusaurus study wiki.
//!
//! Materializes a fixed topic taxonomy into a documentation tree: one
//! directory per topic carrying a `_category_.json` sidebar file and a
//! placeholder syllabus page. Idempotent and non-destructive: re-running
//! never clobbers author-edited content.

pub mod cli;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod taxonomy;

pub use error::{ExitCode, Result, WikiforgeError};
