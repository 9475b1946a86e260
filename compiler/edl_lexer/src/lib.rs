//! Lexer for EDL source using logos.
//!
//! Produces [`Token`]s stamped with the 1-based line and column of their
//! first character. Skips ASCII whitespace, `// ...` line comments and
//! `/* ... */` block comments. Bytes matching no rule become
//! [`TokenClass::Error`] tokens; the parser reports those as unexpected.
//!
//! The [`Lexer`] is a restartable producer: [`Lexer::next_token`] keeps
//! returning the end-of-file sentinel (text: a single NUL) once the input is
//! exhausted, so callers can maintain a lookahead window without bounds
//! checks.

mod line_table;
mod raw_token;

use edl_ir::{Token, TokenClass};
use line_table::LineTable;
use logos::Logos;
use raw_token::RawToken;

/// Lex a whole source string.
///
/// The returned stream always ends with exactly one EOF token.
pub fn lex(source: &str) -> Vec<Token> {
    let lines = LineTable::build(source);
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let (line, column) = lines.position(source, logos.span().start);
        let slice = logos.slice();

        let class = match result {
            Ok(RawToken::Identifier) => TokenClass::Identifier,
            Ok(RawToken::UnsignedInteger) => TokenClass::UnsignedInteger,
            Ok(RawToken::Hexadecimal) => TokenClass::Hexadecimal,
            Ok(_) => TokenClass::Punctuation,
            Err(()) => TokenClass::Error,
        };

        tokens.push(Token::new(slice, class, line, column));
    }

    let (line, column) = lines.position(source, source.len());
    tokens.push(Token::eof(line, column));
    tokens
}

/// Restartable token producer over one source string.
pub struct Lexer {
    tokens: Vec<Token>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            tokens: lex(source),
            pos: 0,
        }
    }

    /// The next token in the stream.
    ///
    /// After the end of input this keeps returning the EOF sentinel.
    pub fn next_token(&mut self) -> Token {
        // Invariant: `tokens` is never empty, its last entry is EOF.
        if self.pos < self.tokens.len() {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            token
        } else {
            self.tokens[self.tokens.len() - 1].clone()
        }
    }
}
