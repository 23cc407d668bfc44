use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed address book data: {0}")]
    Json(#[from] serde_json::Error),

    /// Command was given too few arguments, holds the guidance shown to the user
    #[error("{0}")]
    MissingArguments(String),

    #[error("Invalid phone number format.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD-MM-YYYY")]
    InvalidBirthday(String),

    #[error("Invalid command.")]
    ParseCommand(String),
}

impl AppError {
    /// Errors caused by what the user typed. These are shown as the reply
    /// instead of being treated as a failure of the program.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            AppError::MissingArguments(_)
                | AppError::InvalidPhone(_)
                | AppError::InvalidBirthday(_)
                | AppError::ParseCommand(_)
        )
    }
}
