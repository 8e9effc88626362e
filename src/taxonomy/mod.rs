//! The wiki taxonomy: topic records, the builtin table, position
//! derivation, and table validation.

pub mod builtin;
pub mod file;
pub mod position;
pub mod topic;
pub mod validate;

pub use topic::TopicDefinition;
