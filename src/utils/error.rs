use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Endpoint {endpoint} responded with status {status}")]
    ApiStatusError { endpoint: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Markup error: {message}")]
    MarkupError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// 錯誤分類，對應使用者可見程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入錯誤，以 toast 呈現
    Input,
    /// 外部整合失敗，只記錄日誌
    Integration,
    Configuration,
    System,
}

impl SiteError {
    pub fn validation(message: impl Into<String>) -> Self {
        SiteError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ValidationError { .. } => ErrorCategory::Input,
            SiteError::ApiError(_) | SiteError::ApiStatusError { .. } => {
                ErrorCategory::Integration
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::IoError(_) | SiteError::MarkupError { .. } => ErrorCategory::System,
        }
    }

    /// 給使用者看的訊息；輸入錯誤直接回傳原始提示文字
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ValidationError { message } => message.clone(),
            SiteError::ApiError(_) | SiteError::ApiStatusError { .. } => {
                "There was an error sending your message. Please try again.".to_string()
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = SiteError::validation("Please enter a valid email");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.user_friendly_message(), "Please enter a valid email");
    }

    #[test]
    fn test_status_error_is_integration() {
        let err = SiteError::ApiStatusError {
            endpoint: "https://hooks.example.com".to_string(),
            status: 502,
        };
        assert_eq!(err.category(), ErrorCategory::Integration);
        assert!(err.to_string().contains("502"));
    }
}
