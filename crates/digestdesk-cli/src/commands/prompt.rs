//! Line prompts. Ctrl-C and Ctrl-D cancel.

use anyhow::Result;
use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::completion::Completer;
use rustyline::config::{ColorMode, Configurer};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{DefaultEditor, Editor, Helper};

/// Reads one line, pre-filled with `initial`. `None` when cancelled.
pub fn prompt(label: &str, initial: &str) -> Result<Option<String>> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline_with_initial(label, (initial, "")) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Asks a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", question), "")?;
    Ok(matches!(
        answer.as_deref().map(str::trim),
        Some("y" | "Y" | "yes" | "Yes")
    ))
}

/// Helper that draws every typed character as `*`.
struct MaskingHelper;

impl Helper for MaskingHelper {}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            Borrowed(line)
        } else {
            Owned("*".repeat(line.chars().count()))
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Reads a secret without echoing it. Nothing is added to the history.
pub fn prompt_secret(label: &str) -> Result<Option<String>> {
    let mut rl: Editor<MaskingHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(MaskingHelper));
    // Masking is done by the highlighter, which only runs with colors on.
    rl.set_color_mode(ColorMode::Forced);
    rl.set_auto_add_history(false);
    match rl.readline(label) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_masked() {
        let helper = MaskingHelper;
        assert_eq!(helper.highlight("ghp_abc123", 10), "**********");
        assert_eq!(helper.highlight("", 0), "");
        assert!(helper.highlight_char("ghp_abc123", 10, false));
    }
}
