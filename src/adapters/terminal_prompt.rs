use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::ports::ConfirmationPrompt;

/// Interactive yes/no prompt on the controlling terminal. Defaults to "No".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ConfirmationPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(message).default(false).interact_opt() {
            Ok(Some(answer)) => Ok(answer),
            Ok(None) => Err(AppError::Cancelled),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Cancelled)
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

/// Answers every question with a fixed value; used for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswerPrompt(pub bool);

impl ConfirmationPrompt for FixedAnswerPrompt {
    fn confirm(&self, _message: &str) -> Result<bool, AppError> {
        Ok(self.0)
    }
}
