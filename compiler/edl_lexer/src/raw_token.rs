//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived scanner output before position
//! stamping. Whitespace and both comment forms are skipped here; anything
//! the rules below don't match comes back as a logos error and is surfaced
//! as an error token.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub(crate) enum RawToken {
    // Hex must be its own rule: `0x2A` would otherwise split into the
    // integer `0` and the identifier `x2A`.
    #[regex(r"0[xX][0-9A-Fa-f]+")]
    Hexadecimal,

    #[regex(r"[0-9]+")]
    UnsignedInteger,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("<")]
    LeftAngle,
    #[token(">")]
    RightAngle,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,
    #[token("*")]
    Asterisk,
}
