//! Token cursor over the lexer.
//!
//! Holds the two-token lookahead window (`current` + `next`) the grammar
//! needs; every parsing decision is made from that pair. Also tracks the
//! position of the last consumed token, which is where most diagnostics
//! point.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::Token;
use edl_lexer::Lexer;

pub(crate) struct Cursor {
    lexer: Lexer,
    current: Token,
    next: Token,
    /// File name stamped into every diagnostic.
    file: String,
    /// Position of the most recently consumed token.
    line: u32,
    column: u32,
}

impl Cursor {
    pub(crate) fn new(file: impl Into<String>, mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();
        Cursor {
            lexer,
            current,
            next,
            file: file.into(),
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    /// One-token lookahead past `current`.
    #[inline]
    #[allow(dead_code)] // part of the cursor contract, used by tests
    pub(crate) fn peek_next(&self) -> &Token {
        &self.next
    }

    pub(crate) fn file(&self) -> &str {
        &self.file
    }

    /// Consume and return the current token, shifting the window.
    ///
    /// The lexer keeps yielding its EOF sentinel once exhausted, so the
    /// window never runs dry.
    pub(crate) fn advance(&mut self) -> Token {
        let after_next = self.lexer.next_token();
        let new_current = std::mem::replace(&mut self.next, after_next);
        let consumed = std::mem::replace(&mut self.current, new_current);
        self.line = consumed.line;
        self.column = consumed.column;
        consumed
    }

    /// Consume the current token, requiring its text to match exactly.
    #[inline]
    pub(crate) fn expect(&mut self, expected: &str) -> Result<Token, EdlError> {
        let token = self.advance();
        if token == expected {
            Ok(token)
        } else {
            Err(self.expected_token_error(expected, &token))
        }
    }

    /// Consume the current token, requiring an identifier. The `code`
    /// selects which not-an-identifier diagnostic fires.
    pub(crate) fn expect_identifier(&mut self, code: ErrorCode) -> Result<Token, EdlError> {
        let token = self.advance();
        if token.is_identifier() {
            Ok(token)
        } else {
            Err(self.error_at(code, &token).with_arg(token.value.clone()))
        }
    }

    /// An error at the position of the last consumed token.
    #[cold]
    pub(crate) fn error_here(&self, code: ErrorCode) -> EdlError {
        EdlError::new(code, &self.file, self.line, self.column)
    }

    /// An error at a specific token's position.
    #[cold]
    pub(crate) fn error_at(&self, code: ErrorCode, token: &Token) -> EdlError {
        EdlError::new(code, &self.file, token.line, token.column)
    }

    #[cold]
    #[inline(never)]
    fn expected_token_error(&self, expected: &str, found: &Token) -> EdlError {
        self.error_at(ErrorCode::ExpectedTokenNotFound, found)
            .with_arg(expected)
            .with_arg(found.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(source: &str) -> Cursor {
        Cursor::new("test.edl", Lexer::new(source))
    }

    #[test]
    fn window_holds_current_and_next() {
        let mut cursor = cursor("enclave { }");
        assert!(cursor.current() == "enclave");
        assert!(cursor.peek_next() == "{");

        let consumed = cursor.advance();
        assert!(consumed == "enclave");
        assert!(cursor.current() == "{");
        assert!(cursor.peek_next() == "}");
    }

    #[test]
    fn advance_past_end_keeps_returning_eof() {
        let mut cursor = cursor("x");
        cursor.advance();
        assert!(cursor.current().is_eof());
        assert!(cursor.peek_next().is_eof());
        assert!(cursor.advance().is_eof());
        assert!(cursor.advance().is_eof());
    }

    #[test]
    fn expect_mismatch_reports_both_tokens() {
        let mut cursor = cursor("enclave");
        let error = cursor.expect("{").unwrap_err();
        assert_eq!(error.code(), ErrorCode::ExpectedTokenNotFound);
        assert_eq!(error.args(), ["{".to_string(), "enclave".to_string()]);
        assert_eq!((error.line(), error.column()), (1, 1));
    }

    #[test]
    fn expect_identifier_rejects_punctuation() {
        let mut cursor = cursor("{");
        let error = cursor
            .expect_identifier(ErrorCode::IdentifierNameNotFound)
            .unwrap_err();
        assert_eq!(error.code(), ErrorCode::IdentifierNameNotFound);
    }
}
