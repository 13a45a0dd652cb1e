use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Semicolon,
    Identifier,
    EqualsOperator,
    StringLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::EqualsOperator => write!(f, "="),
            TokenKind::StringLiteral => write!(f, "string literal"),
        }
    }
}

/// A lexical unit: a kind plus the matched text. String literals carry
/// their content without the surrounding quotes. Tokens carry no
/// position information.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}
