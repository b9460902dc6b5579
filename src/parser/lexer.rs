//! Lexer (tokenizer) for boolean expressions
//!
//! Works on the *normalized* form of an expression: all whitespace removed
//! and double negations collapsed (see [`normalize`]). The [`Lexer`] is an
//! iterator so the parser can stop at the first bad character without
//! looking at the rest of the input.

use super::ast::{Operator, Token};
use std::fmt;

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub symbol: char,
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid symbol!", self.symbol)
    }
}

impl std::error::Error for LexError {}

/// Returns true for `!` and `~`.
pub fn is_negation(ch: char) -> bool {
    matches!(
        Operator::from_char(ch),
        Some(Operator::Not | Operator::NotAlias)
    )
}

/// Variables are single alphabetic characters.
pub fn is_variable(ch: char) -> bool {
    ch.is_alphabetic()
}

/// Remove every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Remove adjacent pairs of negation operators until none remain.
///
/// `!!`, `~~`, `!~` and `~!` all cancel. A single stack pass reaches the same
/// fixed point as repeated textual replacement: `!~~!` and `!!!!` vanish
/// completely, `!!!` leaves one `!`.
pub fn collapse_double_negation(text: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if is_negation(ch) && out.last().is_some_and(|&prev| is_negation(prev)) {
            out.pop();
        } else {
            out.push(ch);
        }
    }
    out.into_iter().collect()
}

/// Whitespace stripping followed by double-negation collapse.
pub fn normalize(text: &str) -> String {
    collapse_double_negation(&strip_whitespace(text))
}

/// Character-at-a-time tokenizer over a normalized expression
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the whole input, stopping at the first invalid symbol.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        self.map(|item| item.map(|(_, token)| token)).collect()
    }

    /// Index (in chars) of the next character to be read
    pub fn position(&self) -> usize {
        self.position
    }

    fn classify(ch: char, position: usize) -> Result<Token, LexError> {
        if is_variable(ch) {
            return Ok(Token::Variable(ch));
        }
        match ch {
            '(' => Ok(Token::LeftParen),
            ')' => Ok(Token::RightParen),
            _ => Operator::from_char(ch)
                .map(Token::Operator)
                .ok_or(LexError {
                    symbol: ch,
                    position,
                }),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<(usize, Token), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        // Normalized input has no whitespace, but raw input may be fed in directly
        while self
            .input
            .get(self.position)
            .is_some_and(|ch| ch.is_whitespace())
        {
            self.position += 1;
        }

        let ch = *self.input.get(self.position)?;
        let position = self.position;
        self.position += 1;
        Some(Self::classify(ch, position).map(|token| (position, token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" A +\tC \n"), "A+C");
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn test_double_negation_pairs() {
        assert_eq!(collapse_double_negation("!!A"), "A");
        assert_eq!(collapse_double_negation("~~A"), "A");
        assert_eq!(collapse_double_negation("!~A"), "A");
        assert_eq!(collapse_double_negation("~!A"), "A");
    }

    #[test]
    fn test_double_negation_fixed_point() {
        assert_eq!(collapse_double_negation("!~~!A"), "A");
        assert_eq!(collapse_double_negation("!!!!A"), "A");
        assert_eq!(collapse_double_negation("!!!A"), "!A");
        assert_eq!(collapse_double_negation("(!!x+y)"), "(x+y)");
        // Negations separated by other symbols stay
        assert_eq!(collapse_double_negation("!(!A)"), "!(!A)");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("!   !   !x + y"), "!x+y");
        assert_eq!(normalize("A ^ C + !(A * C)"), "A^C+!(A*C)");
    }

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("!(A*b)");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operator::Not),
                Token::LeftParen,
                Token::Variable('A'),
                Token::Operator(Operator::And),
                Token::Variable('b'),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_all_operators() {
        let mut lexer = Lexer::new("!~*^+");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Operator(Operator::Not)));
        assert!(matches!(tokens[1], Token::Operator(Operator::NotAlias)));
        assert!(matches!(tokens[2], Token::Operator(Operator::And)));
        assert!(matches!(tokens[3], Token::Operator(Operator::Xor)));
        assert!(matches!(tokens[4], Token::Operator(Operator::Or)));
    }

    #[test]
    fn test_invalid_symbol() {
        let mut lexer = Lexer::new("A&B");
        let err = lexer.tokenize().unwrap_err();
        assert_eq!(err.symbol, '&');
        assert_eq!(err.position, 1);
        assert_eq!(err.to_string(), "& is not a valid symbol!");
    }

    #[test]
    fn test_skips_stray_whitespace() {
        let mut lexer = Lexer::new("A + B");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(lexer.position(), 5);
    }
}
