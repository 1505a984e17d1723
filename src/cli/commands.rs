//! Command implementations for the tokenseg CLI.

use std::io::{self, Read};
use std::time::Instant;

use crate::analysis::batch::{tokenize_batch, tokenize_batch_with_threads};
use crate::analysis::classifier::Classifier;
use crate::analysis::tokenizer::{
    CharGroupTokenizerConfig, Tokenizer, TokenizerConfig, WordTokenizerConfig,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TokensegArgs) -> Result<()> {
    match &args.command {
        Command::Word(word_args) => run_word(word_args, &args),
        Command::CharGroup(char_group_args) => run_char_group(char_group_args, &args),
        Command::Config(config_args) => run_config(config_args, &args),
        Command::Classify(classify_args) => run_classify(classify_args, &args),
    }
}

fn run_word(args: &WordArgs, cli_args: &TokensegArgs) -> Result<()> {
    let config = TokenizerConfig::Word(WordTokenizerConfig {
        yield_non_words: !args.no_non_words,
    });
    run_tokenizer(&config, &args.input, cli_args)
}

fn run_char_group(args: &CharGroupArgs, cli_args: &TokensegArgs) -> Result<()> {
    let config = TokenizerConfig::CharGroup(CharGroupTokenizerConfig {
        token_max_len: args.max_len,
    });
    run_tokenizer(&config, &args.input, cli_args)
}

fn run_config(args: &ConfigArgs, cli_args: &TokensegArgs) -> Result<()> {
    let config = TokenizerConfig::from_file(&args.config_file)?;
    run_tokenizer(&config, &args.input, cli_args)
}

fn run_tokenizer(
    config: &TokenizerConfig,
    input: &InputArgs,
    cli_args: &TokensegArgs,
) -> Result<()> {
    let tokenizer = config.build_shared()?;
    let text = read_input(input.text.as_deref())?;

    if input.lines {
        let result = tokenize_lines(tokenizer.as_ref(), &text, input.threads)?;
        if cli_args.verbosity() > 1 {
            eprintln!(
                "Tokenized {} lines in {} ms",
                result.lines.len(),
                result.duration_ms
            );
        }
        output_result(&result, cli_args.output_format, cli_args.pretty)
    } else {
        let result = tokenize_text(tokenizer.as_ref(), &text)?;
        output_result(&result, cli_args.output_format, cli_args.pretty)
    }
}

fn run_classify(args: &ClassifyArgs, cli_args: &TokensegArgs) -> Result<()> {
    let text = read_input(args.text.as_deref())?;
    let result = classify_text(&Classifier::shared(), &text);
    output_result(&result, cli_args.output_format, cli_args.pretty)
}

/// Tokenize a whole input.
pub fn tokenize_text(tokenizer: &dyn Tokenizer, text: &str) -> Result<TokenizeResult> {
    Ok(TokenizeResult {
        tokenizer: tokenizer.name().to_string(),
        tokens: tokenizer.tokenize(text)?.collect(),
    })
}

/// Tokenize every line of `text` in parallel.
pub fn tokenize_lines(
    tokenizer: &dyn Tokenizer,
    text: &str,
    threads: Option<usize>,
) -> Result<LineTokenizeResult> {
    let start_time = Instant::now();
    let lines: Vec<&str> = text.lines().collect();

    let tokens = match threads {
        Some(num_threads) => {
            tokenize_batch_with_threads(tokenizer, lines.as_slice(), num_threads)?
        }
        None => tokenize_batch(tokenizer, lines.as_slice())?,
    };

    Ok(LineTokenizeResult {
        tokenizer: tokenizer.name().to_string(),
        lines: tokens,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Classify every character of `text`.
pub fn classify_text(classifier: &Classifier, text: &str) -> ClassifyResult {
    let characters = text
        .char_indices()
        .map(|(byte_offset, character)| CharInfo {
            character,
            code_point: format!("U+{:04X}", character as u32),
            byte_offset,
            class: classifier.classify(character),
        })
        .collect();

    ClassifyResult { characters }
}

fn read_input(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            log::debug!("read {} bytes from stdin", buffer.len());
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::CharClass;
    use crate::analysis::tokenizer::{CharGroupTokenizer, WordTokenizer};

    #[test]
    fn test_tokenize_text() {
        let tokenizer = WordTokenizer::new();
        let result = tokenize_text(&tokenizer, "Hello, world!").unwrap();
        assert_eq!(result.tokenizer, "word");
        assert_eq!(result.tokens.len(), 5);
    }

    #[test]
    fn test_tokenize_lines() {
        let tokenizer = CharGroupTokenizer::new();
        let result = tokenize_lines(&tokenizer, "ab 12\n\nxyz", Some(2)).unwrap();
        assert_eq!(result.lines.len(), 3);
        assert_eq!(result.lines[0].len(), 3);
        assert!(result.lines[1].is_empty());
        assert_eq!(result.lines[2][0].text, "xyz");
    }

    #[test]
    fn test_classify_text() {
        let result = classify_text(&Classifier::shared(), "a é");
        assert_eq!(result.characters.len(), 3);
        assert_eq!(result.characters[0].class, CharClass::Text);
        assert_eq!(result.characters[1].class, CharClass::Space);
        assert_eq!(result.characters[2].code_point, "U+00E9");
        assert_eq!(result.characters[2].byte_offset, 2);
    }
}
