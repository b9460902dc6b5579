// Token and operator definitions for boolean expressions

use std::fmt;

/// Precedence rank of `(` while it sits on the operator stack.
///
/// Higher than any real operator, so an opening parenthesis is never
/// reduced by a precedence comparison.
pub const LEFT_PAREN_PRECEDENCE: u8 = 8;

/// Precedence rank of `)`; it is consumed immediately and never stacked.
pub const RIGHT_PAREN_PRECEDENCE: u8 = 9;

/// Boolean operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,      // !
    NotAlias, // ~
    And,      // *
    Xor,      // ^
    Or,       // +
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::NotAlias,
        Operator::And,
        Operator::Xor,
        Operator::Or,
    ];

    /// Map a source character to its operator, if it is one.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '!' => Some(Operator::Not),
            '~' => Some(Operator::NotAlias),
            '*' => Some(Operator::And),
            '^' => Some(Operator::Xor),
            '+' => Some(Operator::Or),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Not => '!',
            Operator::NotAlias => '~',
            Operator::And => '*',
            Operator::Xor => '^',
            Operator::Or => '+',
        }
    }

    /// Precedence rank. Lower binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not | Operator::NotAlias => 0,
            Operator::And => 1,
            Operator::Xor => 2,
            Operator::Or => 3,
        }
    }

    /// NOT and its alias take one operand; everything else takes two.
    pub const fn is_unary(self) -> bool {
        matches!(self, Operator::Not | Operator::NotAlias)
    }

    pub const fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Tokens of an infix expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Variable(char),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Precedence rank used by the shunting-yard loop.
    ///
    /// Variables never reach the operator stack and have no rank.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Variable(_) => None,
            Token::Operator(op) => Some(op.precedence()),
            Token::LeftParen => Some(LEFT_PAREN_PRECEDENCE),
            Token::RightParen => Some(RIGHT_PAREN_PRECEDENCE),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// A token of the postfix (reverse Polish) form. Parentheses never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    Variable(char),
    Operator(Operator),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Variable(name) => write!(f, "{}", name),
            PostfixToken::Operator(op) => write!(f, "{}", op),
        }
    }
}
