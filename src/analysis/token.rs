//! Token types produced by the tokenizers.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, byte offsets and type
//! - [`TokenType`] - The kind of run that produced the token
//! - [`TokenStream`] - Boxed lazy iterator of tokens borrowing the input
//!
//! # Examples
//!
//! ```
//! use tokenseg::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 1, 6, 11, TokenType::Word);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.char_len(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token is a non-empty substring of the tokenized input.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Emission index in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `token_type` - The run kind that produced this token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// The kind of run this token was cut from
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// A run of text characters (word tokenizer)
    Word,
    /// A run of ASCII letters (char-group tokenizer)
    Alpha,
    /// A run of ASCII or fullwidth digits (char-group tokenizer)
    Numeric,
    /// Blank characters; in the char-group tokenizer a run of one repeated character
    Space,
    /// A single punctuation, symbol or unprintable character
    Punctuation,
    /// Anything else
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    ///
    /// Offsets are set to cover `text` as if it started the input.
    pub fn new<S: Into<String>>(text: S, position: usize, token_type: TokenType) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
            token_type,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
        token_type: TokenType,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the length of the token text in code points.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Word => "word",
            TokenType::Alpha => "alpha",
            TokenType::Numeric => "numeric",
            TokenType::Space => "space",
            TokenType::Punctuation => "punctuation",
            TokenType::Other => "other",
        };
        f.pad(name)
    }
}

/// A lazy stream of tokens borrowing the text being tokenized.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Helpers for collecting token streams.
pub trait TokenStreamExt: Iterator<Item = Token> + Sized {
    /// Collect only the token texts.
    fn texts(self) -> Vec<String> {
        self.map(|token| token.text).collect()
    }
}

impl<I: Iterator<Item = Token>> TokenStreamExt for I {}
