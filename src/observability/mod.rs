//! Logging infrastructure for `wikiforge` runs.

pub mod logging;

pub use logging::init_logging;
