use thiserror::Error;

#[derive(Error, Debug)]
pub enum RMetricsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Dataset parse error: {0}")]
    DatasetParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },
}

pub type Result<T> = std::result::Result<T, RMetricsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dataset,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RMetricsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::DatasetParseError(_) | Self::DatasetError { .. } => ErrorCategory::Dataset,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Medium,
            Self::DatasetParseError(_) | Self::DatasetError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidConfigValueError { field, .. } => {
                format!("Check the value supplied for '{}' and retry", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            Self::ConfigError { .. } => "Review the command-line arguments".to_string(),
            Self::DatasetParseError(_) => {
                "Verify the ranking dataset TOML against the documented schema".to_string()
            }
            Self::DatasetError { .. } => {
                "Fix the ranking dataset contents (ranks, scores, names)".to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => {
                "Report serialization failed; this is likely a bug".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Dataset => format!("Ranking dataset problem: {}", self),
            ErrorCategory::System => format!("System problem: {}", self),
        }
    }
}
