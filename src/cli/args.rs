//! Command line argument parsing for the tokenseg CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::char_group::DEFAULT_TOKEN_MAX_LEN;

/// tokenseg - split Unicode text into index tokens
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenseg")]
#[command(about = "Split Unicode text into word or character-group tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TokensegArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TokensegArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into words and single non-word characters
    Word(WordArgs),

    /// Split text into letter, digit, blank, punctuation and other groups
    #[command(name = "char-group")]
    CharGroup(CharGroupArgs),

    /// Tokenize with a tokenizer described by a JSON config file
    Config(ConfigArgs),

    /// Show the class of every character
    Classify(ClassifyArgs),
}

/// Input shared by all tokenizing commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Tokenize each input line separately, in parallel
    #[arg(long)]
    pub lines: bool,

    /// Number of worker threads for --lines (default: all cores)
    #[arg(long, requires = "lines")]
    pub threads: Option<usize>,
}

/// Arguments for the word tokenizer
#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    /// Drop non-word characters instead of emitting them
    #[arg(long)]
    pub no_non_words: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the char-group tokenizer
#[derive(Args, Debug, Clone)]
pub struct CharGroupArgs {
    /// Maximum token length in characters
    #[arg(short = 'm', long, default_value_t = DEFAULT_TOKEN_MAX_LEN)]
    pub max_len: usize,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for config-driven tokenization
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Tokenizer config file (JSON)
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for character classification
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to classify (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_command() {
        let args =
            TokensegArgs::try_parse_from(["tokenseg", "word", "--no-non-words", "Hello, world!"])
                .unwrap();

        if let Command::Word(word_args) = args.command {
            assert!(word_args.no_non_words);
            assert_eq!(word_args.input.text.as_deref(), Some("Hello, world!"));
            assert!(!word_args.input.lines);
        } else {
            panic!("Expected Word command");
        }
    }

    #[test]
    fn test_char_group_command() {
        let args = TokensegArgs::try_parse_from([
            "tokenseg",
            "char-group",
            "--max-len",
            "3",
            "--lines",
            "--threads",
            "2",
        ])
        .unwrap();

        if let Command::CharGroup(char_group_args) = args.command {
            assert_eq!(char_group_args.max_len, 3);
            assert!(char_group_args.input.text.is_none());
            assert!(char_group_args.input.lines);
            assert_eq!(char_group_args.input.threads, Some(2));
        } else {
            panic!("Expected CharGroup command");
        }
    }

    #[test]
    fn test_char_group_default_max_len() {
        let args = TokensegArgs::try_parse_from(["tokenseg", "char-group", "x"]).unwrap();
        if let Command::CharGroup(char_group_args) = args.command {
            assert_eq!(char_group_args.max_len, 65535);
        } else {
            panic!("Expected CharGroup command");
        }
    }

    #[test]
    fn test_threads_requires_lines() {
        let result = TokensegArgs::try_parse_from(["tokenseg", "word", "--threads", "2", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_command() {
        let args =
            TokensegArgs::try_parse_from(["tokenseg", "config", "tokenizer.json", "text"]).unwrap();

        if let Command::Config(config_args) = args.command {
            assert_eq!(config_args.config_file, PathBuf::from("tokenizer.json"));
            assert_eq!(config_args.input.text.as_deref(), Some("text"));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TokensegArgs::try_parse_from(["tokenseg", "classify", "a"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TokensegArgs::try_parse_from(["tokenseg", "-vv", "classify", "a"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = TokensegArgs::try_parse_from(["tokenseg", "--quiet", "classify", "a"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TokensegArgs::try_parse_from(["tokenseg", "--format", "json", "classify", "a"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
