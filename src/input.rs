//! UI-agnostic input contract for the scene state machine.
//!
//! The game never parses free text for decisions; it only asks for an option
//! index. The display name is the one exception and is taken verbatim.

use std::collections::VecDeque;
use std::io;

/// Collects player decisions (the input collaborator).
pub trait ChoicePrompt {
    /// Asks the player to pick one of `options`.
    ///
    /// On `Ok` the index is always `< options.len()`; implementations retry
    /// internally until they have a valid answer.
    fn choose(&mut self, description: &str, options: &[&str]) -> io::Result<usize>;

    /// Reads one line of free text, without the line terminator.
    fn read_line(&mut self, description: &str) -> io::Result<String>;
}

/// Pre-recorded answers, consumed in order.
///
/// Out-of-range choices are skipped, the same way an interactive prompt
/// would re-ask. Running out of answers is an `UnexpectedEof` error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    choices: VecDeque<usize>,
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choice(mut self, index: usize) -> Self {
        self.choices.push_back(index);
        self
    }

    pub fn choices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.choices.extend(indices);
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push_back(text.into());
        self
    }

    pub fn remaining_choices(&self) -> usize {
        self.choices.len()
    }

    fn exhausted(what: &str, description: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("scripted input ran out of {} at {:?}", what, description),
        )
    }
}

impl ChoicePrompt for ScriptedInput {
    fn choose(&mut self, description: &str, options: &[&str]) -> io::Result<usize> {
        while let Some(index) = self.choices.pop_front() {
            if index < options.len() {
                return Ok(index);
            }
        }
        Err(Self::exhausted("choices", description))
    }

    fn read_line(&mut self, description: &str) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| Self::exhausted("lines", description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_choices_in_order() {
        let mut input = ScriptedInput::new().choice(1).choice(0);
        assert_eq!(input.choose("pick", &["a", "b"]).unwrap(), 1);
        assert_eq!(input.choose("pick", &["a", "b"]).unwrap(), 0);
        assert_eq!(input.remaining_choices(), 0);
    }

    #[test]
    fn test_out_of_range_choice_is_skipped() {
        let mut input = ScriptedInput::new().choices([5, 2, 1]);
        assert_eq!(input.choose("pick", &["a", "b"]).unwrap(), 1);
    }

    #[test]
    fn test_exhausted_input_is_eof() {
        let mut input = ScriptedInput::new();
        let err = input.choose("pick", &["a"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        let err = input.read_line("name").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_lines_verbatim() {
        let mut input = ScriptedInput::new().line("  Sir Ada  ");
        assert_eq!(input.read_line("name").unwrap(), "  Sir Ada  ");
    }
}
