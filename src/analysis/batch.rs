//! Parallel tokenization of many inputs.
//!
//! All inputs share one tokenizer and therefore one classifier; the
//! classification cache tolerates concurrent readers and writers.

use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TokensegError};

/// Tokenize every input on the global rayon pool.
///
/// The outer vector is in input order.
///
/// ```
/// use tokenseg::analysis::batch::tokenize_batch;
/// use tokenseg::analysis::tokenizer::WordTokenizer;
///
/// let tokenizer = WordTokenizer::new().yield_non_words(false);
/// let tokens = tokenize_batch(&tokenizer, &["one two", "three"]).unwrap();
/// assert_eq!(tokens[0].len(), 2);
/// assert_eq!(tokens[1][0].text, "three");
/// ```
pub fn tokenize_batch<T, S>(tokenizer: &T, texts: &[S]) -> Result<Vec<Vec<Token>>>
where
    T: Tokenizer + ?Sized,
    S: AsRef<str> + Sync,
{
    let start_time = Instant::now();
    log::debug!(
        "tokenizing {} inputs with the {} tokenizer",
        texts.len(),
        tokenizer.name()
    );

    let tokens = texts
        .par_iter()
        .map(|text| -> Result<Vec<Token>> { Ok(tokenizer.tokenize(text.as_ref())?.collect()) })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "tokenized {} inputs in {:?}",
        texts.len(),
        start_time.elapsed()
    );
    Ok(tokens)
}

/// Tokenize every input on a dedicated pool of `num_threads` threads.
pub fn tokenize_batch_with_threads<T, S>(
    tokenizer: &T,
    texts: &[S],
    num_threads: usize,
) -> Result<Vec<Vec<Token>>>
where
    T: Tokenizer + ?Sized,
    S: AsRef<str> + Sync,
{
    let pool = build_pool(num_threads)?;
    pool.install(|| tokenize_batch(tokenizer, texts))
}

fn build_pool(num_threads: usize) -> Result<ThreadPool> {
    if num_threads == 0 {
        return Err(TokensegError::invalid_config(
            "num_threads must be at least 1",
        ));
    }

    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("tokenseg-batch-{i}"))
        .build()
        .map_err(|e| TokensegError::internal(format!("Failed to create thread pool: {e}")))
}
