use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::ConfirmationPrompt;

/// Prompt that answers every question the same way and records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answer: bool,
    cancel: bool,
    pub messages: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, ..Self::default() }
    }

    /// Behave like an operator pressing Ctrl-C.
    pub fn cancelling() -> Self {
        Self { cancel: true, ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        self.messages.borrow_mut().push(message.to_string());
        if self.cancel { Err(AppError::Cancelled) } else { Ok(self.answer) }
    }
}
