//! # Interactive Prompts
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! `ask` prints a question followed by a `[a/b/c] ? ` prompt and reads lines
//! until the reply matches one of the choices. Matching is case-insensitive
//! and works by prefix in both directions, so `y`, `ye` and `yes` all match
//! the choice `y`, and `y` matches the choice `yes`.
//!
use crate::core::error::Result;
use anyhow::{bail, Context};
use std::io::{BufRead, Write};

/// Asks `question` until the reply matches one of `choices`.
///
/// Returns the reply (trimmed and lowercased), or `default` if the reply is
/// empty and a default is given. An empty reply without a default asks again.
///
/// # Errors
///
/// Fails on I/O errors, and on end of input when there is no default.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    choices: &[&str],
    default: Option<&str>,
) -> Result<String> {
    let choices_lc: Vec<String> = choices.iter().map(|c| c.to_lowercase()).collect();
    loop {
        writeln!(output, "{}", question)?;
        write!(output, "[{}] ? ", choices.join("/"))?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read reply")?;
        let reply = line.trim().to_lowercase();

        if reply.is_empty() {
            if let Some(default) = default {
                return Ok(default.to_string());
            }
            if read == 0 {
                bail!("End of input while waiting for an answer to {:?}", question);
            }
            continue;
        }

        if choices_lc
            .iter()
            .any(|choice| reply.starts_with(choice.as_str()) || choice.starts_with(reply.as_str()))
        {
            return Ok(reply);
        }
        if read == 0 {
            bail!("End of input while waiting for an answer to {:?}", question);
        }
    }
}

/// Asks a yes/no question. Returns true for yes.
pub fn ask_yn<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let reply = ask(input, output, question, &["y", "n"], None)?;
    Ok(reply.starts_with('y'))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(replies: &str, choices: &[&str], default: Option<&str>) -> (Result<String>, String) {
        let mut input = Cursor::new(replies.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, "Overwrite?", choices, default);
        (answer, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_prompt_format() {
        let (answer, shown) = run("Yes\n", &["y", "n"], None);
        assert_eq!(answer.unwrap(), "yes");
        assert_eq!(shown, "Overwrite?\n[y/n] ? ");
    }

    #[test]
    fn test_reprompts_until_match() {
        let (answer, shown) = run("maybe\n\nno\n", &["yes", "no"], None);
        assert_eq!(answer.unwrap(), "no");
        assert_eq!(shown.matches("Overwrite?").count(), 3);
    }

    #[test]
    fn test_empty_reply_uses_default() {
        let (answer, _) = run("\n", &["a", "b"], Some("b"));
        assert_eq!(answer.unwrap(), "b");
    }

    #[test]
    fn test_short_reply_matches_longer_choice() {
        let (answer, _) = run("abo\n", &["abort", "retry"], None);
        assert_eq!(answer.unwrap(), "abo");
    }

    #[test]
    fn test_eof_without_default_fails() {
        let (answer, _) = run("", &["y", "n"], None);
        assert!(answer.unwrap_err().to_string().contains("End of input"));
        let (answer, _) = run("what\n", &["y", "n"], None);
        assert!(answer.is_err());
    }

    #[test]
    fn test_ask_yn() -> Result<()> {
        let mut out = Vec::new();
        assert!(ask_yn(&mut Cursor::new("Y\n"), &mut out, "Continue?")?);
        assert!(!ask_yn(&mut Cursor::new("nope\n"), &mut out, "Continue?")?);
        Ok(())
    }
}
