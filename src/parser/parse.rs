//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type and the
//! [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! Parsing runs in three phases over the normalized expression:
//! 1. Shunting-yard conversion from infix tokens to a postfix sequence, with
//!    operand counting to catch operators that lack operands.
//! 2. Structural checks on the normalized text (adjacent variables, misplaced
//!    negation).
//! 3. A final stack-depth walk over the postfix sequence so that anything
//!    handed to the evaluator is a well-formed reverse Polish program.
//!
//! The first error is terminal: no partial postfix form is ever returned.

use crate::parser::ast::{Operator, PostfixToken, Token};
use crate::parser::lexer::{self, LexError, Lexer};
use log::debug;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Which syntax rule an expression violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A `(` was never closed
    UnbalancedOpen,
    /// A `)` has no matching `(`
    UnbalancedClose,
    /// A character that is not a variable, operator, parenthesis or whitespace
    InvalidSymbol,
    /// Two variables with no operator between them, e.g. `AB`
    AdjacentVariables,
    /// A negation after a variable or `)`, e.g. `A!`
    MisplacedNegation,
    /// An operator without enough operands
    OperandUnderflow,
    /// Operands left over with no operator joining them, e.g. `(A)(B)`
    MissingOperator,
    /// Nothing to evaluate
    EmptyExpression,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Char index into the normalized expression, when one can be named
    pub position: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    fn unbalanced_open() -> Self {
        Self::new(ParseErrorKind::UnbalancedOpen, "Unbalanced paren: (")
    }

    fn unbalanced_close() -> Self {
        Self::new(ParseErrorKind::UnbalancedClose, "Unbalanced paren: )")
    }

    fn operand_underflow() -> Self {
        Self::new(ParseErrorKind::OperandUnderflow, "Too many operators!")
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::InvalidSymbol, err.to_string()).at(err.position)
    }
}

/// A validated expression, ready for evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    display: String,
    normalized: String,
    postfix: Vec<PostfixToken>,
    variables: Vec<char>,
}

impl ParsedExpression {
    /// The expression as the user wrote it (outer whitespace trimmed)
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whitespace-free form with double negations collapsed
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn postfix(&self) -> &[PostfixToken] {
        &self.postfix
    }

    /// Postfix form rendered as a compact string, e.g. `AC+`
    pub fn postfix_string(&self) -> String {
        self.postfix.iter().map(|token| token.to_string()).collect()
    }

    /// Distinct variables in ascending order
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

/// Shunting-yard parser for one expression.
///
/// All state lives in the value; a fresh parser is built per expression.
pub struct Parser {
    display: String,
    normalized: String,
    postfix: Vec<PostfixToken>,
    operators: Vec<Token>,
    /// Operands produced but not yet consumed by a binary operator
    pending_operands: usize,
    variables: FxHashSet<char>,
}

impl Parser {
    pub fn new(text: &str) -> Self {
        Parser {
            display: text.trim().to_string(),
            normalized: lexer::normalize(text),
            postfix: Vec::new(),
            operators: Vec::new(),
            pending_operands: 0,
            variables: FxHashSet::default(),
        }
    }

    /// Run every phase and hand back the validated expression
    pub fn parse(mut self) -> Result<ParsedExpression, ParseError> {
        self.convert_to_postfix()?;
        self.check_adjacent_variables()?;
        self.check_negation_placement()?;
        self.check_postfix_shape()?;

        let mut variables: Vec<char> = self.variables.into_iter().collect();
        variables.sort_unstable();

        let parsed = ParsedExpression {
            display: self.display,
            normalized: self.normalized,
            postfix: self.postfix,
            variables,
        };
        debug!(
            "parsed {:?}: normalized {:?}, postfix {:?}, variables {:?}",
            parsed.display,
            parsed.normalized,
            parsed.postfix_string(),
            parsed.variables
        );
        Ok(parsed)
    }

    // ===== Shunting-yard =====

    fn convert_to_postfix(&mut self) -> Result<(), ParseError> {
        let normalized = self.normalized.clone();
        for item in Lexer::new(&normalized) {
            let (position, token) = item?;
            match token {
                Token::Variable(name) => {
                    self.variables.insert(name);
                    self.pending_operands += 1;
                    self.postfix.push(PostfixToken::Variable(name));
                }
                Token::LeftParen => self.operators.push(Token::LeftParen),
                Token::RightParen => self
                    .close_parenthesis()
                    .map_err(|err| err.at(position))?,
                Token::Operator(op) => self.push_operator(op).map_err(|err| err.at(position))?,
            }
        }
        self.drain_operators()
    }

    /// Emit operators down to the matching `(` and discard it
    fn close_parenthesis(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Token::LeftParen) => return Ok(()),
                Some(Token::Operator(op)) => self.emit(op)?,
                _ => return Err(ParseError::unbalanced_close()),
            }
        }
    }

    /// Reduce everything on the stack that binds at least as tightly, then push
    fn push_operator(&mut self, incoming: Operator) -> Result<(), ParseError> {
        while let Some(top) = self.operators.last().copied() {
            match (top, top.precedence()) {
                (Token::Operator(op), Some(rank)) if incoming.precedence() >= rank => {
                    self.operators.pop();
                    self.emit(op)?;
                }
                _ => break,
            }
        }
        self.operators.push(Token::Operator(incoming));
        Ok(())
    }

    fn drain_operators(&mut self) -> Result<(), ParseError> {
        while self.pending_operands > 0 {
            match self.operators.pop() {
                None => break,
                Some(Token::Operator(op)) => self.emit(op)?,
                Some(_) => return Err(ParseError::unbalanced_open()),
            }
        }
        Ok(())
    }

    fn emit(&mut self, op: Operator) -> Result<(), ParseError> {
        self.postfix.push(PostfixToken::Operator(op));
        if op.is_unary() {
            return Ok(());
        }
        if self.pending_operands < 2 {
            return Err(ParseError::operand_underflow());
        }
        // Two operands in, one combined result out
        self.pending_operands -= 1;
        Ok(())
    }

    // ===== Structural checks =====

    fn check_adjacent_variables(&self) -> Result<(), ParseError> {
        let chars: Vec<char> = self.normalized.chars().collect();
        for (i, pair) in chars.windows(2).enumerate() {
            if lexer::is_variable(pair[0]) && lexer::is_variable(pair[1]) {
                return Err(ParseError::new(
                    ParseErrorKind::AdjacentVariables,
                    "Cannot have two variables in a row...",
                )
                .at(i + 1));
            }
        }
        Ok(())
    }

    fn check_negation_placement(&self) -> Result<(), ParseError> {
        let chars: Vec<char> = self.normalized.chars().collect();
        for (i, pair) in chars.windows(2).enumerate() {
            if !lexer::is_negation(pair[1]) {
                continue;
            }
            if lexer::is_variable(pair[0]) {
                return Err(ParseError::new(
                    ParseErrorKind::MisplacedNegation,
                    "! should come before a variable, not after.",
                )
                .at(i + 1));
            }
            if pair[0] == ')' {
                return Err(ParseError::new(
                    ParseErrorKind::MisplacedNegation,
                    "'!' should not follow a ')'",
                )
                .at(i + 1));
            }
        }
        Ok(())
    }

    /// Walk the postfix sequence with a depth counter
    fn check_postfix_shape(&self) -> Result<(), ParseError> {
        if self.postfix.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyExpression,
                "Expression has no variables to evaluate",
            ));
        }

        let mut depth = 0usize;
        for token in &self.postfix {
            match token {
                PostfixToken::Variable(_) => depth += 1,
                PostfixToken::Operator(op) => {
                    if depth < op.arity() {
                        return Err(ParseError::operand_underflow());
                    }
                    depth -= op.arity() - 1;
                }
            }
        }

        if depth > 1 {
            return Err(ParseError::new(
                ParseErrorKind::MissingOperator,
                "Missing operator between operands",
            ));
        }
        Ok(())
    }
}

/// Parse and validate an infix boolean expression
pub fn parse(text: &str) -> Result<ParsedExpression, ParseError> {
    Parser::new(text).parse()
}
