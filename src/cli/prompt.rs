//! Interactive input prompts
//!
//! All prompts write to stdout and read a single trimmed line from stdin.
//! Passwords use rpassword's hidden input when stdin is a terminal and fall
//! back to a plain line read when piped, so the binary stays scriptable.

use std::io::{self, BufRead, IsTerminal, Write};

/// Print a prompt and read one trimmed line from stdin
///
/// Returns `None` on end of input (EOF), which the menu treats as exit.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Prompt for a password without echoing when attached to a terminal
pub fn read_password(prompt: &str) -> io::Result<Option<String>> {
    if io::stdin().is_terminal() {
        let password = rpassword::prompt_password(prompt)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(Some(password))
    } else {
        read_line(prompt)
    }
}

/// Prompt for a yes/no confirmation; anything other than y/Y is "no"
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let answer = read_line(prompt)?.unwrap_or_default();
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}
