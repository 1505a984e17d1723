//! Tokenizer implementations.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Groups runs of letters and numbers; every other
//!   character is emitted alone or dropped
//! - [`char_group::CharGroupTokenizer`] - Separates ASCII letters, digits,
//!   repeated blanks, punctuation and everything else, with a run length cap
//!
//! Both tokenizers are lazy: the returned [`TokenStream`] advances the scan only
//! as far as needed to produce the next token.
//!
//! # Examples
//!
//! ```
//! use tokenseg::analysis::token::TokenStreamExt;
//! use tokenseg::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, world!").unwrap().texts();
//! assert_eq!(tokens, vec!["Hello", ",", " ", "world", "!"]);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::Classifier;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve many threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod char_group;
pub mod word;

pub use char_group::{CharGroupTokenizer, CharGroupTokenizerConfig, CharGroupTokens};
pub use word::{WordTokenizer, WordTokenizerConfig, WordTokens};

/// Serializable description of a tokenizer.
///
/// ```
/// use tokenseg::analysis::tokenizer::TokenizerConfig;
///
/// let config = TokenizerConfig::from_json(r#"{"type": "char_group", "token_max_len": 8}"#).unwrap();
/// let tokenizer = config.build_shared().unwrap();
/// assert_eq!(tokenizer.name(), "char_group");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Word / non-word splitter
    Word(WordTokenizerConfig),
    /// Character-group splitter
    CharGroup(CharGroupTokenizerConfig),
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::Word(WordTokenizerConfig::default())
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded tokenizer config from {}", path.as_ref().display());
        Self::from_json(&content)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a tokenizer backed by the given classifier.
    pub fn build(&self, classifier: Arc<Classifier>) -> Result<Box<dyn Tokenizer>> {
        let tokenizer: Box<dyn Tokenizer> = match self {
            TokenizerConfig::Word(config) => {
                Box::new(WordTokenizer::from_config(config.clone(), classifier))
            }
            TokenizerConfig::CharGroup(config) => {
                Box::new(CharGroupTokenizer::from_config(config.clone(), classifier)?)
            }
        };
        log::debug!("built {} tokenizer from {:?}", tokenizer.name(), self);
        Ok(tokenizer)
    }

    /// Build a tokenizer backed by the process-wide classifier.
    pub fn build_shared(&self) -> Result<Box<dyn Tokenizer>> {
        self.build(Classifier::shared())
    }
}
