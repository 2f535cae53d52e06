//! Interactive prompt - reads one password and writes one label.

use std::io::{BufRead, Write};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::check_password_strength;

pub const PROMPT: &str = "Enter password: ";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error on the terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a single line from `input` as the password.
///
/// The line terminator (`\n` or `\r\n`) is stripped; everything else,
/// including leading and trailing spaces, is part of the password.
/// End of input yields an empty password.
pub fn read_password<R: BufRead>(input: &mut R) -> Result<SecretString, PromptError> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(SecretString::new(line.into()))
}

/// Writes the prompt, reads the password and writes its label.
pub fn run_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), PromptError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let password = read_password(input)?;
    writeln!(output, "{}", check_password_strength(password.expose_secret()))?;
    output.flush()?;
    Ok(())
}
