//! Validated prompts that keep asking until the answer is usable

use crate::errors::{parse_int, InputError};
use crate::ui::console::{Console, Tone};
use crate::utils::logger;
use anyhow::Result;

/// Fewest words a sentence prompt accepts
pub const MIN_SENTENCE_WORDS: usize = 3;

/// Outcome of a validated prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    /// A valid answer together with the text the user typed
    Entered { value: T, input: String },
    /// The user left the prompt empty and the prompt allows aborting
    Aborted,
}

impl<T> Prompted<T> {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Prompted::Aborted)
    }

    /// Raw text of the answer, `""` when aborted
    pub fn input(&self) -> &str {
        match self {
            Prompted::Entered { input, .. } => input,
            Prompted::Aborted => "",
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Prompted::Entered { value, .. } => Some(value),
            Prompted::Aborted => None,
        }
    }
}

/// Split on whitespace, dropping empty tokens
pub fn split_words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

/// Words of a sentence with at least [`MIN_SENTENCE_WORDS`] words
pub fn parse_sentence(sentence: &str) -> Result<Vec<String>, InputError> {
    let words = split_words(sentence);
    if words.len() < MIN_SENTENCE_WORDS {
        return Err(InputError::TooFewWords {
            required: MIN_SENTENCE_WORDS,
            found: words.len(),
        });
    }
    Ok(words)
}

/// Ask for a whole number with `"Enter <label>: "`.
///
/// With `stop_if_empty` an empty answer aborts the prompt. Without it, an
/// empty answer is just another unparsable number and is asked again.
pub fn read_int(console: &mut dyn Console, label: &str, stop_if_empty: bool) -> Result<Prompted<i32>> {
    let mut last_error: Option<InputError> = None;

    loop {
        if let Some(err) = last_error.take() {
            console.write_line(&format!("{}\n", err.prompt_message()), Tone::Error)?;
        }
        console.write(&format!("Enter {}: ", label), Tone::Prompt)?;

        let input = console.read_line()?.trim().to_string();
        if input.is_empty() && stop_if_empty {
            return Ok(Prompted::Aborted);
        }

        match parse_int(&input) {
            Ok(value) => return Ok(Prompted::Entered { value, input }),
            Err(err) => {
                logger::debug(&format!("Rejected {}: {}", label, err));
                last_error = Some(err);
            }
        }
    }
}

/// Ask for a sentence of at least three words with `"<label>: "`.
///
/// Only an entirely empty line counts as empty; a line of spaces is a
/// sentence with no words.
pub fn read_sentence(
    console: &mut dyn Console,
    label: &str,
    stop_if_empty: bool,
) -> Result<Prompted<Vec<String>>> {
    let mut last_error: Option<InputError> = None;

    loop {
        if let Some(err) = last_error.take() {
            console.write_line(&format!("{}\n", err.prompt_message()), Tone::Error)?;
        }
        console.write(&format!("{}: ", label), Tone::Prompt)?;

        let input = console.read_line()?;
        if input.is_empty() && stop_if_empty {
            return Ok(Prompted::Aborted);
        }

        match parse_sentence(&input) {
            Ok(value) => return Ok(Prompted::Entered { value, input }),
            Err(err) => {
                logger::debug(&format!("Rejected {}: {:?}", label, err));
                last_error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::console::MockConsole;
    use crate::testing::ScriptedConsole;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_int_accepts_number() {
        let mut console = ScriptedConsole::with_lines(["  42 "]);
        let result = read_int(&mut console, "age", true).unwrap();
        assert_eq!(
            result,
            Prompted::Entered {
                value: 42,
                input: "42".to_string()
            }
        );
        assert_eq!(console.transcript(), "Enter age: ");
    }

    #[test]
    fn test_read_int_aborts_on_empty() {
        let mut console = ScriptedConsole::with_lines([""]);
        let result = read_int(&mut console, "age", true).unwrap();
        assert!(result.is_aborted());
        assert_eq!(result.input(), "");
    }

    #[test]
    fn test_read_int_whitespace_counts_as_empty() {
        let mut console = ScriptedConsole::with_lines(["   "]);
        assert!(read_int(&mut console, "age", true).unwrap().is_aborted());
    }

    #[test]
    fn test_read_int_reprompts_on_garbage() {
        let mut console = ScriptedConsole::with_lines(["abc", "7"]);
        let result = read_int(&mut console, "age", true).unwrap();
        assert_eq!(result.into_value(), Some(7));
        assert_eq!(
            console.transcript(),
            "Enter age: Error: 'abc' is not a valid number.\n\nEnter age: "
        );
    }

    #[test]
    fn test_read_int_empty_is_invalid_without_stop() {
        let mut console = ScriptedConsole::with_lines(["", "30"]);
        let result = read_int(&mut console, "age 1", false).unwrap();
        assert_eq!(result.into_value(), Some(30));
        assert_eq!(
            console.transcript(),
            "Enter age 1: Error: '' is not a valid number.\n\nEnter age 1: "
        );
    }

    #[test]
    fn test_read_int_with_mock_console() {
        let mut console = MockConsole::new();
        let mut seq = Sequence::new();
        console
            .expect_write()
            .withf(|text, tone| text == "Enter number of people: " && *tone == Tone::Prompt)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        console
            .expect_read_line()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("3".to_string()));

        let result = read_int(&mut console, "number of people", true).unwrap();
        assert_eq!(result.into_value(), Some(3));
    }

    #[test]
    fn test_read_int_propagates_closed_input() {
        let mut console = ScriptedConsole::new();
        assert!(read_int(&mut console, "age", true).is_err());
    }

    #[test]
    fn test_parse_sentence() {
        assert_eq!(
            parse_sentence("the quick  brown fox").unwrap(),
            vec!["the", "quick", "brown", "fox"]
        );
        assert_eq!(
            parse_sentence("a b"),
            Err(InputError::TooFewWords { required: 3, found: 2 })
        );
        assert!(parse_sentence("\t one\ttwo   three ").is_ok());
    }

    #[test]
    fn test_read_sentence_reprompts_until_three_words() {
        let mut console = ScriptedConsole::with_lines(["a b", "   ", "one two three"]);
        let result = read_sentence(&mut console, "Write sentence", true).unwrap();
        assert_eq!(result.input(), "one two three");
        assert_eq!(result.into_value().unwrap().len(), 3);
        assert_eq!(
            console.transcript(),
            "Write sentence: Too short. Write at least 3 words.\n\n\
             Write sentence: Too short. Write at least 3 words.\n\n\
             Write sentence: "
        );
    }

    #[test]
    fn test_read_sentence_aborts_on_empty() {
        let mut console = ScriptedConsole::with_lines([""]);
        let result = read_sentence(&mut console, "Write sentence", true).unwrap();
        assert!(result.is_aborted());
    }

    #[test]
    fn test_read_sentence_empty_rejected_without_stop() {
        let mut console = ScriptedConsole::with_lines(["", "x y z"]);
        let result = read_sentence(&mut console, "Write sentence", false).unwrap();
        assert!(!result.is_aborted());
        assert!(console.transcript().contains("Too short."));
    }
}
