//! Truth-table evaluation
//!
//! - [`engine`]: Postfix evaluation and assignment enumeration
//! - [`errors`]: The variable-count refusal
//! - [`constants`]: Table size limit
//!
//! # Execution Model
//!
//! Assignments are enumerated with a plain counter from `0` to `2^n - 1`. Bit
//! `n - 1 - i` of the counter is the value of the `i`-th variable in sorted
//! order, so the first variable changes slowest. Each assignment is evaluated
//! by a single left-to-right pass over the postfix form with a value stack.

pub mod constants;
pub mod engine;
pub mod errors;
