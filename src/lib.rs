//! # Introduction
//!
//! booltab parses infix boolean expressions and builds their truth tables.
//! Expressions use single-letter variables, `!`/`~` (NOT), `*` (AND),
//! `^` (XOR), `+` (OR) and parentheses.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Lexer → Parser → Postfix → Evaluator → TruthTable → text / TUI
//! ```
//!
//! 1. [`parser`] — normalizes the text, runs the shunting-yard conversion and
//!    rejects malformed input with a [`ParseError`].
//! 2. [`evaluator`] — enumerates every assignment of the variables and
//!    evaluates the postfix form for each one.
//! 3. [`table`] — the resulting [`TruthTable`], its classification and its
//!    plain-text rendering.
//! 4. [`ui`] — ratatui-based interactive viewer; not part of the stable
//!    library API.
//!
//! ```
//! let parsed = booltab::parse("A + C").unwrap();
//! assert_eq!(booltab::variables(&parsed), &['A', 'C']);
//!
//! let table = booltab::evaluate_all(&parsed).unwrap();
//! let results: Vec<bool> = table.results().collect();
//! assert_eq!(results, vec![false, true, true, true]);
//! ```

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod table;
pub mod ui;

pub use error::BooltabError;
pub use evaluator::constants::MAX_VARIABLES;
pub use evaluator::engine::{evaluate_all, variables};
pub use evaluator::errors::TableError;
pub use parser::parse::{parse, ParseError, ParseErrorKind, ParsedExpression};
pub use table::{Assignment, Classification, ResultRow, TruthTable};

/// Parse `text` and build its truth table in one step
pub fn truth_table(text: &str) -> Result<TruthTable, BooltabError> {
    let parsed = parse(text).map_err(|source| BooltabError::InvalidExpression {
        expression: text.trim().to_string(),
        source,
    })?;
    Ok(evaluate_all(&parsed)?)
}
