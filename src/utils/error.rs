use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReactionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server answered {status} for {path}")]
    StatusError { status: u16, path: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Response has no `{field}` field")]
    MissingFieldError { field: String },

    #[error("Response field `{field}` cannot be rendered as text: {value}")]
    UnrenderableFieldError { field: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReactionError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReactionError::ApiError(e) if e.is_timeout() => {
                "The blog server did not answer in time".to_string()
            }
            ReactionError::ApiError(_) => "Could not reach the blog server".to_string(),
            ReactionError::StatusError { status, .. } => {
                format!("The blog server rejected the request (HTTP {})", status)
            }
            ReactionError::MissingFieldError { .. }
            | ReactionError::UnrenderableFieldError { .. } => {
                "The blog server sent an unexpected response".to_string()
            }
            ReactionError::ConfigError { .. }
            | ReactionError::InvalidConfigValueError { .. }
            | ReactionError::UrlError(_)
            | ReactionError::IoError(_) => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReactionError>;
