//! Character-group tokenizer implementation.
//!
//! A more granular alternative to [`WordTokenizer`](super::WordTokenizer). It
//! separates the input into runs of:
//!
//! - ASCII letters
//! - digits (ASCII and fullwidth)
//! - one repeated blank character (`"  "` and `"\t\t"` are different runs)
//! - single punctuation characters
//! - everything else
//!
//! No run grows past `token_max_len` code points; a full run is cut and a new
//! run of the same kind starts. Punctuation tokens are always one character.
//! Concatenating the token texts always reproduces the input.
//!
//! # Examples
//!
//! ```
//! use tokenseg::analysis::token::TokenStreamExt;
//! use tokenseg::analysis::tokenizer::Tokenizer;
//! use tokenseg::analysis::tokenizer::char_group::CharGroupTokenizer;
//!
//! let tokenizer = CharGroupTokenizer::new();
//! let tokens = tokenizer.tokenize("abc123 456!!").unwrap().texts();
//! assert_eq!(tokens, vec!["abc", "123", " ", "456", "!", "!"]);
//!
//! let tokenizer = CharGroupTokenizer::with_max_len(3).unwrap();
//! let tokens = tokenizer.tokenize("aaaaa").unwrap().texts();
//! assert_eq!(tokens, vec!["aaa", "aa"]);
//! ```

use std::str::CharIndices;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::charset;
use crate::analysis::classifier::Classifier;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TokensegError};

/// Default maximum token length in code points.
pub const DEFAULT_TOKEN_MAX_LEN: usize = 65535;

/// Configuration for [`CharGroupTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharGroupTokenizerConfig {
    /// Maximum length of a run token, in code points. Must be at least 1.
    pub token_max_len: usize,
}

impl Default for CharGroupTokenizerConfig {
    fn default() -> Self {
        Self {
            token_max_len: DEFAULT_TOKEN_MAX_LEN,
        }
    }
}

impl CharGroupTokenizerConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.token_max_len == 0 {
            return Err(TokensegError::invalid_config(
                "token_max_len must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A tokenizer that groups characters by kind.
#[derive(Clone, Debug)]
pub struct CharGroupTokenizer {
    config: CharGroupTokenizerConfig,
    classifier: Arc<Classifier>,
}

impl Default for CharGroupTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CharGroupTokenizer {
    /// Create a tokenizer with the default maximum token length.
    pub fn new() -> Self {
        CharGroupTokenizer {
            config: CharGroupTokenizerConfig::default(),
            classifier: Classifier::shared(),
        }
    }

    /// Create a tokenizer with the given maximum token length.
    ///
    /// # Errors
    ///
    /// Returns an error if `token_max_len` is 0.
    pub fn with_max_len(token_max_len: usize) -> Result<Self> {
        Self::from_config(
            CharGroupTokenizerConfig { token_max_len },
            Classifier::shared(),
        )
    }

    /// Create a tokenizer from a config and a classifier.
    pub fn from_config(
        config: CharGroupTokenizerConfig,
        classifier: Arc<Classifier>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(CharGroupTokenizer { config, classifier })
    }

    /// Replace the classifier.
    pub fn with_classifier(mut self, classifier: Arc<Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &CharGroupTokenizerConfig {
        &self.config
    }

    /// Start a lazy scan over `text`.
    pub fn tokens<'a>(&'a self, text: &'a str) -> CharGroupTokens<'a> {
        CharGroupTokens {
            classifier: &self.classifier,
            text,
            chars: text.char_indices(),
            max_len: self.config.token_max_len,
            run: Run::Generic,
            run_start: 0,
            run_len: 0,
            pending: None,
            position: 0,
        }
    }
}

impl Tokenizer for CharGroupTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(self.tokens(text)))
    }

    fn name(&self) -> &'static str {
        "char_group"
    }
}

/// Kind of the run being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Run {
    /// No run flag set. With `run_len == 0` the buffer is empty.
    Generic,
    Alpha,
    Numeric,
    /// Repetitions of exactly this blank character.
    Space(char),
}

impl Run {
    fn token_type(self) -> TokenType {
        match self {
            Run::Generic => TokenType::Other,
            Run::Alpha => TokenType::Alpha,
            Run::Numeric => TokenType::Numeric,
            Run::Space(_) => TokenType::Space,
        }
    }
}

/// Iterator over the tokens of one input.
///
/// Invariant: `run != Run::Generic` implies `run_len > 0`.
pub struct CharGroupTokens<'a> {
    classifier: &'a Classifier,
    text: &'a str,
    chars: CharIndices<'a>,
    max_len: usize,
    run: Run,
    run_start: usize,
    // Length of the current run in code points.
    run_len: usize,
    // Punctuation that ended a run; emitted right after it.
    pending: Option<Token>,
    position: usize,
}

impl CharGroupTokens<'_> {
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

    /// Cut the current run at byte `end`, leaving an empty generic buffer.
    fn flush(&mut self, end: usize) -> Option<Token> {
        if self.run_len == 0 {
            return None;
        }
        let token_type = self.run.token_type();
        let token = self.emit(self.run_start, end, token_type);
        self.run = Run::Generic;
        self.run_len = 0;
        Some(token)
    }

    fn start_run(&mut self, run: Run, offset: usize) {
        self.run = run;
        self.run_start = offset;
        self.run_len = 1;
    }

    fn keyed_run(&self, c: char) -> Option<Run> {
        if charset::is_alphabet(c) {
            Some(Run::Alpha)
        } else if charset::is_digit(c) {
            Some(Run::Numeric)
        } else if self.classifier.is_space(c) {
            Some(Run::Space(c))
        } else {
            None
        }
    }
}

impl Iterator for CharGroupTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        while let Some((offset, c)) = self.chars.next() {
            // Letters, digits and blanks: extend a run of the same key or cut.
            if let Some(run) = self.keyed_run(c) {
                if self.run == run && self.run_len < self.max_len {
                    self.run_len += 1;
                    continue;
                }
                let flushed = self.flush(offset);
                self.start_run(run, offset);
                match flushed {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }

            if self.classifier.is_punctuation(c) {
                let flushed = self.flush(offset);
                let end = offset + c.len_utf8();
                let punctuation = self.emit(offset, end, TokenType::Punctuation);
                return match flushed {
                    Some(token) => {
                        self.pending = Some(punctuation);
                        Some(token)
                    }
                    None => Some(punctuation),
                };
            }

            if self.run != Run::Generic {
                // A keyed run ends; a generic one begins.
                let flushed = self.flush(offset);
                self.start_run(Run::Generic, offset);
                return flushed;
            }

            if self.run_len < self.max_len {
                if self.run_len == 0 {
                    self.run_start = offset;
                }
                self.run_len += 1;
                continue;
            }

            let flushed = self.flush(offset);
            self.start_run(Run::Generic, offset);
            return flushed;
        }

        let end = self.text.len();
        self.flush(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenStreamExt;

    fn texts(tokenizer: &CharGroupTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).unwrap().texts()
    }

    #[test]
    fn test_char_group_tokenizer() {
        let tokenizer = CharGroupTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "abc123 456!!"),
            vec!["abc", "123", " ", "456", "!", "!"]
        );
    }

    #[test]
    fn test_max_len_cuts_runs() {
        let tokenizer = CharGroupTokenizer::with_max_len(3).unwrap();
        assert_eq!(texts(&tokenizer, "aaaaa"), vec!["aaa", "aa"]);
        assert_eq!(texts(&tokenizer, "1234567"), vec!["123", "456", "7"]);
        assert_eq!(texts(&tokenizer, "    "), vec!["   ", " "]);
        assert_eq!(texts(&tokenizer, "ééééé"), vec!["ééé", "éé"]);
    }

    #[test]
    fn test_max_len_one() {
        let tokenizer = CharGroupTokenizer::with_max_len(1).unwrap();
        assert_eq!(texts(&tokenizer, "ab1é"), vec!["a", "b", "1", "é"]);
    }

    #[test]
    fn test_zero_max_len_is_rejected() {
        let result = CharGroupTokenizer::with_max_len(0);
        assert!(matches!(result, Err(TokensegError::InvalidConfig(_))));
    }

    #[test]
    fn test_space_runs_do_not_mix() {
        let tokenizer = CharGroupTokenizer::new();
        assert_eq!(texts(&tokenizer, "a  \t\tb"), vec!["a", "  ", "\t\t", "b"]);
    }

    #[test]
    fn test_fullwidth_digits() {
        let tokenizer = CharGroupTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "x１２3"),
            vec!["x", "\u{FF11}\u{FF12}3"]
        );
    }

    #[test]
    fn test_generic_runs() {
        let tokenizer = CharGroupTokenizer::new();
        // Non-ASCII letters are neither alphabet nor digits.
        assert_eq!(texts(&tokenizer, "caféné"), vec!["caf", "é", "n", "é"]);
        assert_eq!(texts(&tokenizer, "日本語abc"), vec!["日本語", "abc"]);
        assert_eq!(texts(&tokenizer, "é.é"), vec!["é", ".", "é"]);
    }

    #[test]
    fn test_punctuation_resets_state() {
        let tokenizer = CharGroupTokenizer::new();
        assert_eq!(texts(&tokenizer, "ab-cd"), vec!["ab", "-", "cd"]);
        assert_eq!(texts(&tokenizer, "\u{0000}\u{0000}"), vec!["\u{0000}", "\u{0000}"]);
    }

    #[test]
    fn test_token_types() {
        let tokenizer = CharGroupTokenizer::new();
        let types: Vec<TokenType> = tokenizer
            .tokenize("ab12 é,")
            .unwrap()
            .map(|token| token.token_type)
            .collect();
        assert_eq!(
            types,
            vec![
                TokenType::Alpha,
                TokenType::Numeric,
                TokenType::Space,
                TokenType::Other,
                TokenType::Punctuation,
            ]
        );
    }

    #[test]
    fn test_positions_and_offsets() {
        let tokenizer = CharGroupTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("é!a").unwrap().collect();
        assert_eq!(
            tokens,
            vec![
                Token::with_offsets("é", 0, 0, 2, TokenType::Other),
                Token::with_offsets("!", 1, 2, 3, TokenType::Punctuation),
                Token::with_offsets("a", 2, 3, 4, TokenType::Alpha),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = CharGroupTokenizer::new();
        assert!(texts(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(CharGroupTokenizer::new().name(), "char_group");
    }
}
