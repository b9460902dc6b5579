//! Crate-level error type for callers that go from raw text to a table

use crate::evaluator::errors::TableError;
use crate::parser::parse::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BooltabError {
    /// The expression failed to parse
    #[error("The expression: {expression}, is invalid!\n{source}")]
    InvalidExpression {
        expression: String,
        #[source]
        source: ParseError,
    },

    /// The expression parsed but its table was refused
    #[error(transparent)]
    Table(#[from] TableError),
}
