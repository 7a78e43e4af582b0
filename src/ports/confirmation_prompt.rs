use crate::domain::AppError;

/// Port for yes/no questions put to the operator.
pub trait ConfirmationPrompt {
    /// Ask `message`; declining is `Ok(false)`, an interrupt is `AppError::Cancelled`.
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}
