//! Error types for truth-table generation
//!
//! Evaluation itself cannot fail once an expression has parsed; the only
//! refusal is the variable-count guard in [`TableError`].

use thiserror::Error;

/// Reasons a truth table is not built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// More distinct variables than the table limit allows
    #[error("Too many variables! Will result in spam... ({count} found, limit is {limit})")]
    TooManyVariables { count: usize, limit: usize },
}
