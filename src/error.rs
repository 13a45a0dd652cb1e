use crate::token::TokenKind;
use thiserror::Error;

/// Errors that abort a run. There is no recovery: variable bindings and
/// sink writes made before the failing statement stay in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("string literal not closed before end of input")]
    UnterminatedString,

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("unexpected token: expected '{expected}', found '{found}'")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
