use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReproError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Template '{template}' has unresolved placeholders: {}", placeholders.join(", "))]
    TemplateError {
        template: String,
        placeholders: Vec<String>,
    },

    #[error("Directory {path} already exists")]
    DirectoryExistsError { path: String },

    #[error("Command '{command}' failed: {message}")]
    CommandError { command: String, message: String },

    #[error("Operation cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Template,
    FileSystem,
    Network,
    ExternalCommand,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReproError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ReproError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReproError::IoError(_) | ReproError::DirectoryExistsError { .. } => {
                ErrorCategory::FileSystem
            }
            ReproError::HttpError(_) => ErrorCategory::Network,
            ReproError::SerializationError(_) | ReproError::TemplateError { .. } => {
                ErrorCategory::Template
            }
            ReproError::ConfigError { .. }
            | ReproError::ConfigValidationError { .. }
            | ReproError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReproError::ValidationError { .. } => ErrorCategory::Validation,
            ReproError::CommandError { .. } => ErrorCategory::ExternalCommand,
            ReproError::Cancelled => ErrorCategory::User,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReproError::Cancelled => ErrorSeverity::Low,
            ReproError::HttpError(_) | ReproError::CommandError { .. } => ErrorSeverity::Medium,
            ReproError::TemplateError { .. } | ReproError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 取消不算失敗，其餘一律以 1 結束
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReproError::DirectoryExistsError { path } => {
                format!("Error: Directory {} already exists", path)
            }
            ReproError::ValidationError { message, .. } => message.clone(),
            ReproError::Cancelled => "Operation cancelled".to_string(),
            other => format!("Error creating project: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::FileSystem => {
                "Pick another project name or remove the existing directory".to_string()
            }
            ErrorCategory::Network => {
                "Check your network connection or use --operations-source none".to_string()
            }
            ErrorCategory::Configuration => {
                "Check the TOML configuration file and command-line flags".to_string()
            }
            ErrorCategory::Validation => "Correct the highlighted value and retry".to_string(),
            ErrorCategory::Template => {
                "This is a bug in the bundled templates, please report it".to_string()
            }
            ErrorCategory::ExternalCommand => {
                "Make sure node, npm and npx are installed and on PATH".to_string()
            }
            ErrorCategory::User => "Run the command again when ready".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReproError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_exits_cleanly() {
        assert_eq!(ReproError::Cancelled.exit_code(), 0);
        assert_eq!(ReproError::Cancelled.category(), ErrorCategory::User);
    }

    #[test]
    fn test_failures_exit_with_one() {
        let err = ReproError::DirectoryExistsError {
            path: "/tmp/x".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.user_friendly_message(), "Error: Directory /tmp/x already exists");

        let err = ReproError::TemplateError {
            template: "Main.java".to_string(),
            placeholders: vec!["region".to_string()],
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("region"));
    }
}
