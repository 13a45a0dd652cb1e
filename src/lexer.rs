use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

/// Single-pass scanner turning source text into a flat token list.
///
/// Tokenization is not incremental: a `Lexer` is built for one input and
/// `tokenize` walks it front to back exactly once.
pub struct Lexer {
    input: String,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.to_string(),
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut chars = self.input.chars().peekable();

        while let Some(&c) = chars.peek() {
            // --------- whitespace ---------
            if c.is_whitespace() {
                chars.next();
                continue;
            }

            // --------- single-char symbols ---------
            if let Some(kind) = match c {
                '(' => Some(TokenKind::LeftParen),
                ')' => Some(TokenKind::RightParen),
                ';' => Some(TokenKind::Semicolon),
                '=' => Some(TokenKind::EqualsOperator),
                _ => None,
            } {
                chars.next();
                tokens.push(Token::new(kind, c.to_string()));
                continue;
            }

            // --------- string literals ---------
            // Read verbatim up to the closing quote. The language has no
            // escape sequences, so a backslash is just another character.
            if c == '"' {
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(ch) => s.push(ch),
                        None => return Err(Error::UnterminatedString),
                    }
                }
                tokens.push(Token::new(TokenKind::StringLiteral, s));
                continue;
            }

            // --------- identifiers ---------
            // No keyword table: `roots` and `sound` come out as ordinary
            // identifiers and the executor recognizes them by text.
            if c.is_ascii_alphabetic() {
                let mut id = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        id.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::new(TokenKind::Identifier, id));
                continue;
            }

            // Anything else ends tokenization: the tokens scanned so far
            // are kept, the rest of the input is dropped. Not an error.
            break;
        }

        Ok(tokens)
    }
}
