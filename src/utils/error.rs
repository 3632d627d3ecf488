use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Vendor error during {stage}: {message}")]
    Vendor { stage: String, message: String },

    #[error("Notification error: {channel}: {message}")]
    Notification { channel: String, message: String },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn vendor(stage: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Vendor {
            stage: stage.into(),
            message: message.into(),
        }
    }

    pub fn notification(channel: impl ToString, message: impl Into<String>) -> Self {
        AppError::Notification {
            channel: channel.to_string(),
            message: message.into(),
        }
    }
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
