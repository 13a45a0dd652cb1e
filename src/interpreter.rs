use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::writer::Writer;

/// Executes a token list in a single left-to-right pass. There is no AST:
/// statements are recognized and carried out directly off the token
/// cursor, and side effects (variable writes, sink writes) happen as each
/// statement completes.
pub struct Interpreter<W: Writer> {
    cursor: usize,
    tokens: Vec<Token>,
    variables: HashMap<String, String>,
    output: W,
}

impl<W: Writer> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Interpreter {
            cursor: 0,
            tokens: Vec::new(),
            variables: HashMap::new(),
            output,
        }
    }

    /// Runs one source text to completion. All state from the previous
    /// run (tokens, cursor, variable table) and the sink are reset first,
    /// so runs never leak bindings into each other. On error, output
    /// already written by earlier statements stays on the sink.
    pub fn run(&mut self, input: &str) -> Result<()> {
        self.clear();
        self.tokens = Lexer::new(input).tokenize()?;
        self.execute()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn clear(&mut self) {
        self.cursor = 0;
        self.tokens.clear();
        self.variables.clear();
        self.output.clear();
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn consume(&mut self, expected: TokenKind) -> Result<()> {
        match self.next() {
            None => Err(Error::UnexpectedEndOfInput),
            Some(token) if token.kind == expected => Ok(()),
            Some(token) => Err(Error::UnexpectedToken {
                expected,
                found: token.kind,
            }),
        }
    }

    /// Top-level statement loop. Only identifiers can start a statement;
    /// every other token here is skipped without effect.
    fn execute(&mut self) -> Result<()> {
        while let Some(token) = self.next() {
            if token.kind == TokenKind::Identifier {
                self.statement(token)?;
            }
        }
        Ok(())
    }

    fn statement(&mut self, identifier: Token) -> Result<()> {
        if identifier.text == "roots" {
            return self.assignment();
        }

        // Only a `(` directly after the identifier makes this a call. The
        // paren is peeked, not consumed; the call statement re-reads it.
        // A lone identifier is a no-op.
        let is_call = matches!(self.peek(), Some(t) if t.kind == TokenKind::LeftParen);
        if is_call {
            self.call(&identifier.text)?;
        }
        Ok(())
    }

    /// `roots` NAME `=` VALUE `;` — name and value accept any token kind,
    /// only the `=` and `;` are checked. Last assignment wins.
    fn assignment(&mut self) -> Result<()> {
        let name = self.next().ok_or(Error::UnexpectedEndOfInput)?;
        self.consume(TokenKind::EqualsOperator)?;
        let value = self.next().ok_or(Error::UnexpectedEndOfInput)?;
        self.consume(TokenKind::Semicolon)?;

        self.variables.insert(name.text, value.text);
        Ok(())
    }

    /// CALLEE `(` ARG `)` `;` — the argument list is consumed for every
    /// callee, known or not, so parsing stays in sync. Unknown callees
    /// are then dropped silently.
    fn call(&mut self, callee: &str) -> Result<()> {
        self.consume(TokenKind::LeftParen)?;
        let argument = self.next().ok_or(Error::UnexpectedEndOfInput)?;
        self.consume(TokenKind::RightParen)?;
        self.consume(TokenKind::Semicolon)?;

        match callee {
            "sound" => self.sound(&argument),
            _ => {}
        }
        Ok(())
    }

    /// The one builtin. An identifier argument resolves through the
    /// variable table, falling back to the empty string when unbound; a
    /// string literal is written as-is; other argument kinds write
    /// nothing. The trailing newline goes out in every case.
    fn sound(&mut self, argument: &Token) {
        match argument.kind {
            TokenKind::Identifier => {
                let value = self
                    .variables
                    .get(&argument.text)
                    .map(String::as_str)
                    .unwrap_or("");
                self.output.write(value);
            }
            TokenKind::StringLiteral => self.output.write(&argument.text),
            _ => {}
        }
        self.output.write("\n");
    }
}
