use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl VacancyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VacancyError::InvalidInput { .. } => ErrorSeverity::Low,
            VacancyError::ApiError(_) | VacancyError::HttpStatus { .. } => ErrorSeverity::Medium,
            VacancyError::SerializationError(_)
            | VacancyError::ConfigValidationError { .. }
            | VacancyError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            VacancyError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Exit code used by the binary for one-shot commands.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VacancyError::ApiError(_) => "Could not reach the vacancy search API".to_string(),
            VacancyError::HttpStatus { status, .. } => {
                format!("The vacancy search API answered with HTTP {}", status)
            }
            VacancyError::IoError(e) => format!("File access failed: {}", e),
            VacancyError::SerializationError(_) => {
                "Vacancies could not be written as JSON".to_string()
            }
            VacancyError::ConfigValidationError { field, .. }
            | VacancyError::InvalidConfigValueError { field, .. } => {
                format!("Configuration problem with '{}'", field)
            }
            VacancyError::InvalidInput { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VacancyError::ApiError(_) => "Check your network connection and the source endpoint",
            VacancyError::HttpStatus { .. } => {
                "Check the search query and the configured endpoint, then try again"
            }
            VacancyError::IoError(_) => "Make sure the storage path is writable",
            VacancyError::SerializationError(_) => "Inspect the stored vacancy data",
            VacancyError::ConfigValidationError { .. }
            | VacancyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            VacancyError::InvalidInput { .. } => "Enter a value in the expected format",
        }
    }
}

pub type Result<T> = std::result::Result<T, VacancyError>;
