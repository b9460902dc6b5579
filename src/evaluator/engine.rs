//! Postfix evaluation and truth-table construction
//!
//! The evaluator trusts the parser: a [`ParsedExpression`] always holds a
//! well-formed postfix sequence, so evaluation has no error path. The only
//! refusal is the variable-count guard in [`evaluate_all`].

use crate::evaluator::constants::MAX_VARIABLES;
use crate::evaluator::errors::TableError;
use crate::parser::ast::{Operator, PostfixToken};
use crate::parser::parse::ParsedExpression;
use crate::table::{Assignment, ResultRow, TruthTable};
use log::{trace, warn};

fn pop_operand(stack: &mut Vec<bool>) -> bool {
    let value = stack.pop();
    debug_assert!(value.is_some(), "postfix operand stack underflow");
    value.unwrap_or(false)
}

fn apply_binary(stack: &mut Vec<bool>, op: impl Fn(bool, bool) -> bool) {
    // Most recent value is the right-hand operand
    let rhs = pop_operand(stack);
    let lhs = pop_operand(stack);
    stack.push(op(lhs, rhs));
}

/// Evaluate a postfix sequence, looking up each variable with `lookup`
pub fn evaluate_postfix<F>(postfix: &[PostfixToken], lookup: F) -> bool
where
    F: Fn(char) -> bool,
{
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            PostfixToken::Variable(name) => stack.push(lookup(name)),
            PostfixToken::Operator(Operator::Not | Operator::NotAlias) => {
                let value = pop_operand(&mut stack);
                stack.push(!value);
            }
            PostfixToken::Operator(Operator::And) => apply_binary(&mut stack, |l, r| l && r),
            PostfixToken::Operator(Operator::Or) => apply_binary(&mut stack, |l, r| l || r),
            PostfixToken::Operator(Operator::Xor) => apply_binary(&mut stack, |l, r| l != r),
        }
    }

    debug_assert_eq!(stack.len(), 1, "postfix left {} values", stack.len());
    pop_operand(&mut stack)
}

impl ParsedExpression {
    /// Evaluate under a single assignment.
    ///
    /// Variables missing from `assignment` read as false.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.evaluate_with(|name| assignment.get(name).unwrap_or(false))
    }

    /// Evaluate with an arbitrary variable lookup
    pub fn evaluate_with<F>(&self, lookup: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        evaluate_postfix(self.postfix(), lookup)
    }

    /// Method form of [`evaluate_all`]
    pub fn truth_table(&self) -> Result<TruthTable, TableError> {
        evaluate_all(self)
    }
}

/// Distinct variables of `parsed`, ascending
pub fn variables(parsed: &ParsedExpression) -> &[char] {
    parsed.variables()
}

/// Evaluate `parsed` under every assignment of its variables.
///
/// Refuses expressions with more than [`MAX_VARIABLES`] variables instead of
/// building an exponentially large table.
pub fn evaluate_all(parsed: &ParsedExpression) -> Result<TruthTable, TableError> {
    let variables = parsed.variables();
    if variables.len() > MAX_VARIABLES {
        warn!(
            "refusing truth table for {:?}: {} variables, limit {}",
            parsed.display(),
            variables.len(),
            MAX_VARIABLES
        );
        return Err(TableError::TooManyVariables {
            count: variables.len(),
            limit: MAX_VARIABLES,
        });
    }

    let row_count = 1usize << variables.len();
    let rows = (0..row_count)
        .map(|index| {
            let assignment = Assignment::from_index(variables, index);
            let result = parsed.evaluate(&assignment);
            trace!("row {}: {:?} -> {}", index, assignment, result);
            ResultRow::new(assignment, result)
        })
        .collect();

    Ok(TruthTable::new(
        parsed.display().to_string(),
        variables.to_vec(),
        rows,
    ))
}
