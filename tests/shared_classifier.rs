//! Concurrent use of one classifier from many threads.

mod common;

use std::sync::Arc;
use std::thread;

use tokenseg::analysis::batch::{tokenize_batch, tokenize_batch_with_threads};
use tokenseg::analysis::classifier::Classifier;
use tokenseg::analysis::token::Token;
use tokenseg::analysis::tokenizer::{CharGroupTokenizer, Tokenizer, WordTokenizer};
use tokenseg::error::Result;

use common::corpus;

fn sequential(tokenizer: &dyn Tokenizer, texts: &[String]) -> Result<Vec<Vec<Token>>> {
    texts
        .iter()
        .map(|text| -> Result<Vec<Token>> { Ok(tokenizer.tokenize(text)?.collect()) })
        .collect()
}

#[test]
fn test_threads_share_one_cold_classifier() -> Result<()> {
    let classifier = Arc::new(Classifier::new());
    let tokenizer = Arc::new(WordTokenizer::new().with_classifier(classifier.clone()));
    let texts = Arc::new(corpus());

    let expected = sequential(&WordTokenizer::new(), &texts)?;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tokenizer = Arc::clone(&tokenizer);
            let texts = Arc::clone(&texts);
            thread::spawn(move || sequential(tokenizer.as_ref(), &texts))
        })
        .collect();

    for handle in handles {
        let tokens = handle.join().expect("tokenizer thread panicked")?;
        assert_eq!(tokens, expected);
    }

    // Every distinct character was classified once and kept.
    let distinct: std::collections::HashSet<char> = texts.iter().flat_map(|t| t.chars()).collect();
    assert_eq!(classifier.text_cache().len(), distinct.len());
    Ok(())
}

#[test]
fn test_batch_matches_sequential() -> Result<()> {
    let texts = corpus();

    let tokenizer = CharGroupTokenizer::with_max_len(5)?
        .with_classifier(Arc::new(Classifier::new()));
    let expected = sequential(&tokenizer, &texts)?;

    assert_eq!(tokenize_batch(&tokenizer, texts.as_slice())?, expected);
    assert_eq!(tokenize_batch_with_threads(&tokenizer, texts.as_slice(), 4)?, expected);
    Ok(())
}

#[test]
fn test_private_classifiers_are_isolated() {
    let first = Arc::new(Classifier::new());
    let second = Arc::new(Classifier::new());

    let tokenizer = WordTokenizer::new().with_classifier(first.clone());
    let _ = tokenizer.tokenize("isolated").map(|stream| stream.count());

    assert!(first.cache_len() > 0);
    assert_eq!(second.cache_len(), 0);
}
