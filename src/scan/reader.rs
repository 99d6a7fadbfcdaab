//! Pull-style JSON event reader over a token buffer.
//!
//! The reader validates JSON grammar as it goes and reports every event
//! together with its nesting depth. Depth 0 is the document itself and
//! depth 1 holds the top-level properties, so the key of a top-level
//! property and the start and end of its value are all seen at depth 1.

use serde_json::Value;
use text_size::TextSize;

use super::lexer::{Token, TokenKind, tokenize};
use crate::error::{CodecError, Result};

/// One structural event.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonEvent {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    Key(String),
    Scalar(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    KeyOrEnd,
    Key,
    Colon,
    Value,
    ValueOrEnd,
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object(Expect),
    Array(Expect),
}

/// Event reader that can rewind to the start of its input.
pub struct EventReader<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    stack: Vec<Frame>,
    started: bool,
    finished: bool,
}

impl<'a> EventReader<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            stack: Vec::new(),
            started: false,
            finished: false,
        })
    }

    /// Rewinds to the first token, discarding all nesting state.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.stack.clear();
        self.started = false;
        self.finished = false;
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Offset of the next unread token, or the end of input.
    pub fn offset(&self) -> TextSize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(TextSize::new(0), |token| token.range.start())
    }

    /// The next event and the depth it occurred at; `None` at the end.
    pub fn next_event(&mut self) -> Result<Option<(JsonEvent, usize)>> {
        loop {
            if self.finished {
                return match self.tokens.get(self.pos) {
                    Some(token) => Err(unexpected(token)),
                    None => Ok(None),
                };
            }

            let token = *self
                .tokens
                .get(self.pos)
                .ok_or_else(|| CodecError::json("Unexpected end of input"))?;
            self.pos += 1;

            let expect = match self.stack.last() {
                None if !self.started => Expect::Value,
                None => return Err(unexpected(&token)),
                Some(Frame::Object(expect) | Frame::Array(expect)) => *expect,
            };

            match (expect, token.kind) {
                (Expect::KeyOrEnd | Expect::CommaOrEnd, TokenKind::RBrace)
                    if matches!(self.stack.last(), Some(Frame::Object(_))) =>
                {
                    self.pop();
                    return Ok(Some((JsonEvent::EndObject, self.depth())));
                }
                (Expect::ValueOrEnd | Expect::CommaOrEnd, TokenKind::RBracket)
                    if matches!(self.stack.last(), Some(Frame::Array(_))) =>
                {
                    self.pop();
                    return Ok(Some((JsonEvent::EndArray, self.depth())));
                }
                (Expect::KeyOrEnd | Expect::Key, TokenKind::String) => {
                    self.set_top(Expect::Colon);
                    let key = serde_json::from_str(token.text).map_err(|e| bad_token(&token, e))?;
                    return Ok(Some((JsonEvent::Key(key), self.depth())));
                }
                (Expect::Colon, TokenKind::Colon) => self.set_top(Expect::Value),
                (Expect::CommaOrEnd, TokenKind::Comma) => match self.stack.last() {
                    Some(Frame::Object(_)) => self.set_top(Expect::Key),
                    _ => self.set_top(Expect::Value),
                },
                (Expect::Value | Expect::ValueOrEnd, kind) => return self.value(&token, kind).map(Some),
                _ => return Err(unexpected(&token)),
            }
        }
    }

    fn value(&mut self, token: &Token<'_>, kind: TokenKind) -> Result<(JsonEvent, usize)> {
        let depth = self.depth();
        self.started = true;
        self.set_top(Expect::CommaOrEnd);
        match kind {
            TokenKind::LBrace => {
                self.stack.push(Frame::Object(Expect::KeyOrEnd));
                Ok((JsonEvent::StartObject, depth))
            }
            TokenKind::LBracket => {
                self.stack.push(Frame::Array(Expect::ValueOrEnd));
                Ok((JsonEvent::StartArray, depth))
            }
            kind if kind.is_scalar() => {
                let value = serde_json::from_str(token.text).map_err(|e| bad_token(token, e))?;
                if self.stack.is_empty() {
                    self.finished = true;
                }
                Ok((JsonEvent::Scalar(value), depth))
            }
            _ => Err(unexpected(token)),
        }
    }

    fn set_top(&mut self, expect: Expect) {
        match self.stack.last_mut() {
            Some(Frame::Object(state) | Frame::Array(state)) => *state = expect,
            None => {}
        }
    }

    fn pop(&mut self) {
        self.stack.pop();
        if self.stack.is_empty() {
            self.finished = true;
        }
    }
}

fn unexpected(token: &Token<'_>) -> CodecError {
    CodecError::json(format!(
        "Unexpected '{}' at offset {}",
        token.text,
        u32::from(token.range.start())
    ))
}

fn bad_token(token: &Token<'_>, err: serde_json::Error) -> CodecError {
    CodecError::json(format!(
        "Invalid literal {} at offset {}: {err}",
        token.text,
        u32::from(token.range.start())
    ))
}
