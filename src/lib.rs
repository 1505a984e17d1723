//! # tokenseg
//!
//! Unicode-aware tokenization for full-text indexing.
//!
//! ## Features
//!
//! - Word tokenizer that groups letters and numbers by Unicode general category
//! - Character-group tokenizer separating ASCII letters, digits, blanks,
//!   punctuation and everything else, with a run length cap
//! - Memoizing, thread-safe character classifier
//! - Lazy token streams with byte offsets
//!
//! No stemming, case folding or normalization is performed; tokens are exact
//! substrings of the input.

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::classifier::{CharClass, Classifier};
    pub use crate::analysis::token::{Token, TokenStream, TokenStreamExt, TokenType};
    pub use crate::analysis::tokenizer::{
        CharGroupTokenizer, Tokenizer, TokenizerConfig, WordTokenizer,
    };
    pub use crate::error::{Result, TokensegError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
