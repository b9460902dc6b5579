//! Boolean expression parser
//!
//! This module turns infix text into a validated postfix form:
//! - [`lexer`]: Normalization (whitespace, double negation) and tokenization
//! - [`parse`]: Shunting-yard conversion and syntax validation
//! - [`ast`]: Token and operator definitions
//!
//! # Accepted Syntax
//!
//! - Variables: single alphabetic characters, case-sensitive
//! - Operators: `!` / `~` (NOT), `*` (AND), `^` (XOR), `+` (OR)
//! - Parentheses for grouping
//!
//! NOT binds tightest, then AND, XOR and OR. Binary operators are
//! left-associative.

pub mod ast;
pub mod lexer;
pub mod parse;
