//! Crate error types.

use thiserror::Error;

use crate::topology::Topology;

/// Result type returned by fallible `lifegrid` routines.
pub type LifegridResult<T> = Result<T, LifegridError>;

/// Error encountered while validating an engine configuration or parsing a
/// rule.
///
/// Out-of-range *cell coordinates* are never errors; the engine silently
/// ignores them.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LifegridError {
    #[error("rule threshold {threshold} exceeds the {max} possible neighbors of a {topology} cell")]
    RuleOutOfRange {
        threshold: u8,
        max: u8,
        topology: Topology,
    },
    #[error("invalid rule string: {0:?}")]
    BadRuleString(String),
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("rule {0:?} has birth/survival counts that do not form a contiguous range")]
    NonContiguousRule(String),
}
