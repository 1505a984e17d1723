//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::CharClass;
use crate::analysis::token::Token;
use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Result structure for tokenizing one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokenizer: String,
    pub tokens: Vec<Token>,
}

/// Result structure for tokenizing input line by line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineTokenizeResult {
    pub tokenizer: String,
    pub lines: Vec<Vec<Token>>,
    pub duration_ms: u64,
}

/// Classification of one character.
#[derive(Debug, Serialize, Deserialize)]
pub struct CharInfo {
    pub character: char,
    pub code_point: String,
    pub byte_offset: usize,
    pub class: CharClass,
}

/// Result structure for character classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub characters: Vec<CharInfo>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    /// Write the human-readable form of `self`.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for TokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for token in &self.tokens {
            write_token(out, token)?;
        }
        Ok(())
    }
}

impl HumanOutput for LineTokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for (line_no, tokens) in self.lines.iter().enumerate() {
            writeln!(out, "Line {} ({} tokens):", line_no + 1, tokens.len())?;
            for token in tokens {
                write!(out, "  ")?;
                write_token(out, token)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for ClassifyResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for info in &self.characters {
            writeln!(
                out,
                "{:>6}  {:<8}  {:<11}  {:?}",
                info.byte_offset, info.code_point, info.class, info.character
            )?;
        }
        Ok(())
    }
}

fn write_token(out: &mut dyn Write, token: &Token) -> Result<()> {
    writeln!(
        out,
        "{:>4}  {:>5}..{:<5}  {:<11}  {:?}",
        token.position, token.start_offset, token.end_offset, token.token_type, token.text
    )?;
    Ok(())
}

/// Write a result in the specified format.
pub fn write_result<T, W>(result: &T, format: OutputFormat, pretty: bool, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Write a result to stdout.
pub fn output_result<T>(result: &T, format: OutputFormat, pretty: bool) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_result(result, format, pretty, &mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    fn sample() -> TokenizeResult {
        TokenizeResult {
            tokenizer: "word".to_string(),
            tokens: vec![
                Token::with_offsets("Hi", 0, 0, 2, TokenType::Word),
                Token::with_offsets("!", 1, 2, 3, TokenType::Punctuation),
            ],
        }
    }

    #[test]
    fn test_human_output() {
        let mut out = Vec::new();
        write_result(&sample(), OutputFormat::Human, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("word"));
        assert!(lines[0].ends_with("\"Hi\""));
        assert!(lines[1].contains("punctuation"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_result(&sample(), OutputFormat::Json, false, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tokenizer"], "word");
        assert_eq!(value["tokens"][1]["text"], "!");
        assert_eq!(value["tokens"][1]["token_type"], "punctuation");
    }

    #[test]
    fn test_line_output() {
        let result = LineTokenizeResult {
            tokenizer: "char_group".to_string(),
            lines: vec![vec![Token::new("a", 0, TokenType::Alpha)], vec![]],
            duration_ms: 0,
        };
        let mut out = Vec::new();
        write_result(&result, OutputFormat::Human, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Line 1 (1 tokens):"));
        assert!(text.contains("Line 2 (0 tokens):"));
    }
}
