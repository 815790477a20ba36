//! Overwrite confirmation for `init`

use crate::error::{DevkitError, DevkitResult};
use std::io::{BufRead, IsTerminal, Write};

/// Source of yes/no answers
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> DevkitResult<bool>;
}

/// Asks on the terminal.
///
/// Uses an interactive dialoguer prompt when stdin is a TTY; otherwise reads
/// one line from stdin, where `y` (any case) means yes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> DevkitResult<bool> {
        if std::io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|err| DevkitError::Prompt(std::io::Error::other(err)));
        }

        let mut stdout = std::io::stdout();
        write!(stdout, "{} (y/n): ", prompt).map_err(DevkitError::Prompt)?;
        stdout.flush().map_err(DevkitError::Prompt)?;

        read_answer(std::io::stdin().lock())
    }
}

fn read_answer(mut input: impl BufRead) -> DevkitResult<bool> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(DevkitError::Prompt)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Always gives the same answer (`--force`, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> DevkitResult<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_answer() {
        assert!(read_answer("y\n".as_bytes()).unwrap());
        assert!(read_answer("Y\n".as_bytes()).unwrap());
        assert!(!read_answer("yes\n".as_bytes()).unwrap());
        assert!(!read_answer("n\n".as_bytes()).unwrap());
        assert!(!read_answer("".as_bytes()).unwrap());
    }
}
