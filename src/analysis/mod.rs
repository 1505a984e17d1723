//! Text analysis module for tokenseg.
//!
//! This module provides the character tables, the memoizing classifier and the
//! tokenizers built on top of it.

pub mod batch;
pub mod charset;
pub mod classifier;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use classifier::*;
pub use token::*;
pub use tokenizer::*;
