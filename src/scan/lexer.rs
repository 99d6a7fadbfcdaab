//! Logos-based lexer for JSON text.

use logos::Logos;
use text_size::{TextRange, TextSize};

use crate::error::{CodecError, Result};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();
        let text = self.inner.slice();
        let Ok(kind) = kind else {
            return Some(Err(CodecError::json(format!(
                "Unexpected '{text}' at offset {}",
                span.start
            ))));
        };
        Some(text_range(span.start, span.end).map(|range| Token { kind, text, range }))
    }
}

/// Offsets past `u32::MAX` cannot be represented and are rejected.
fn text_range(start: usize, end: usize) -> Result<TextRange> {
    let size = |offset: usize| {
        TextSize::try_from(offset)
            .map_err(|_| CodecError::json(format!("Input too large: offset {offset}")))
    };
    Ok(TextRange::new(size(start)?, size(end)?))
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    Lexer::new(input).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,
}

impl TokenKind {
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::String | Self::Number | Self::True | Self::False | Self::Null
        )
    }
}
