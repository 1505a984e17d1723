//! Word tokenizer implementation.
//!
//! Runs of text characters (letters, numbers, private use) become one token
//! each. Every other character is either emitted as its own one-character token
//! or dropped as a separator, depending on `yield_non_words`. With non-words
//! enabled, the concatenated token texts reproduce the input exactly.
//!
//! # Examples
//!
//! ```
//! use tokenseg::analysis::token::TokenStreamExt;
//! use tokenseg::analysis::tokenizer::Tokenizer;
//! use tokenseg::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new().yield_non_words(false);
//! let tokens = tokenizer.tokenize("Hello, world!").unwrap().texts();
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

use std::str::CharIndices;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{CharClass, Classifier};
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Configuration for [`WordTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordTokenizerConfig {
    /// Emit non-text characters as single-character tokens.
    pub yield_non_words: bool,
}

impl Default for WordTokenizerConfig {
    fn default() -> Self {
        Self {
            yield_non_words: true,
        }
    }
}

/// A tokenizer that groups text characters into words.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    config: WordTokenizerConfig,
    classifier: Arc<Classifier>,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a word tokenizer using the shared classifier, emitting non-words.
    pub fn new() -> Self {
        Self::from_config(WordTokenizerConfig::default(), Classifier::shared())
    }

    /// Create a word tokenizer from a config and a classifier.
    pub fn from_config(config: WordTokenizerConfig, classifier: Arc<Classifier>) -> Self {
        WordTokenizer { config, classifier }
    }

    /// Set whether non-text characters are emitted.
    pub fn yield_non_words(mut self, yield_non_words: bool) -> Self {
        self.config.yield_non_words = yield_non_words;
        self
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: Arc<Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &WordTokenizerConfig {
        &self.config
    }

    /// Start a lazy scan over `text`.
    pub fn tokens<'a>(&'a self, text: &'a str) -> WordTokens<'a> {
        WordTokens {
            classifier: &self.classifier,
            text,
            chars: text.char_indices(),
            yield_non_words: self.config.yield_non_words,
            word_start: None,
            pending: None,
            position: 0,
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(self.tokens(text)))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Iterator over the tokens of one input.
///
/// The scan is idle while `word_start` is `None` and buffering otherwise.
pub struct WordTokens<'a> {
    classifier: &'a Classifier,
    text: &'a str,
    chars: CharIndices<'a>,
    yield_non_words: bool,
    word_start: Option<usize>,
    // A non-word that ended a word; emitted right after it.
    pending: Option<Token>,
    position: usize,
}

impl WordTokens<'_> {
    fn emit(&mut self, start: usize, end: usize, token_type: TokenType) -> Token {
        let token = Token::with_offsets(
            &self.text[start..end],
            self.position,
            start,
            end,
            token_type,
        );
        self.position += 1;
        token
    }

    fn non_word_type(&self, c: char) -> TokenType {
        match self.classifier.classify(c) {
            CharClass::Space => TokenType::Space,
            CharClass::Punctuation | CharClass::Unprintable => TokenType::Punctuation,
            CharClass::Text | CharClass::Other => TokenType::Other,
        }
    }
}

impl Iterator for WordTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        while let Some((offset, c)) = self.chars.next() {
            if self.classifier.is_text(c) {
                if self.word_start.is_none() {
                    self.word_start = Some(offset);
                }
                continue;
            }

            let word = self
                .word_start
                .take()
                .map(|start| self.emit(start, offset, TokenType::Word));

            let non_word = if self.yield_non_words {
                let token_type = self.non_word_type(c);
                Some(self.emit(offset, offset + c.len_utf8(), token_type))
            } else {
                None
            };

            match (word, non_word) {
                (Some(word), non_word) => {
                    self.pending = non_word;
                    return Some(word);
                }
                (None, Some(non_word)) => return Some(non_word),
                (None, None) => {}
            }
        }

        let end = self.text.len();
        self.word_start
            .take()
            .map(|start| self.emit(start, end, TokenType::Word))
    }
}
