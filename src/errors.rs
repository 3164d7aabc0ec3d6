//! Input validation failures
//!
//! Every variant is recoverable: callers show the message and prompt again.
//! An empty answer at an abort-on-empty prompt is not an error, see
//! [`crate::ui::prompts::Prompted::Aborted`].

/// Validation failures raised while reading user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a valid number.")]
    InvalidNumber(String),

    #[error("'{0}' is not an option.")]
    NotAnOption(String),

    #[error("Too short. Write at least {required} words.")]
    TooFewWords { required: usize, found: usize },
}

impl InputError {
    /// Message shown above the main menu prompt
    pub fn menu_message(&self) -> String {
        format!("Wrong input. {}", self)
    }

    /// Message shown above a data entry prompt
    pub fn prompt_message(&self) -> String {
        match self {
            InputError::TooFewWords { .. } => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}

/// Parse a trimmed answer as a whole number
pub fn parse_int(input: &str) -> Result<i32, InputError> {
    input
        .parse::<i32>()
        .map_err(|_| InputError::InvalidNumber(input.to_string()))
}
