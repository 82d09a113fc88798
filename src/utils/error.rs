use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parsing failed for '{field}': {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load catalog from {source_name}: {message}")]
    CatalogLoadError {
        source_name: String,
        message: String,
    },

    #[error("Missing input: {field}")]
    MissingInputError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConfiguratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::CsvError(_)
            | Self::FormatError(_)
            | Self::SerializationError(_)
            | Self::CatalogLoadError { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::ConfigParseError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::MissingInputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingInputError { .. } => ErrorSeverity::Low,
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::FormatError(_)
            | Self::SerializationError(_)
            | Self::CatalogLoadError { .. }
            | Self::ConfigError { .. }
            | Self::ConfigParseError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Every failure exits non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::HttpError(_) => {
                "Check the catalog URL and your network connection, then run again".to_string()
            }
            Self::CsvError(_) | Self::FormatError(_) => {
                "Try another output format such as --format text".to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CatalogLoadError { .. } => {
                "Make sure the catalog is a JSON object keyed by category (cpu, gpu, motherboard, ram, storage, psu, case)".to_string()
            }
            Self::ConfigError { .. } | Self::ConfigParseError { .. } => {
                "Review the configuration file for syntax errors".to_string()
            }
            Self::MissingConfigError { field } => format!("Provide a value for '{}'", field),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value given for '{}'", field)
            }
            Self::MissingInputError { .. } => {
                "Pick a processor and a graphics card listed by the `options` command".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) => "Could not reach the catalog server".to_string(),
            Self::CatalogLoadError { source_name, .. } => {
                format!("The parts catalog could not be loaded from {}", source_name)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            Self::MissingInputError { field } => format!("No {} was selected", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_low_severity() {
        let err = ConfiguratorError::MissingInputError {
            field: "cpu".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.user_friendly_message(), "No cpu was selected");
    }

    #[test]
    fn test_catalog_load_error_message() {
        let err = ConfiguratorError::CatalogLoadError {
            source_name: "components.json".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().contains("components.json"));
        assert!(err.user_friendly_message().contains("components.json"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let missing = ConfiguratorError::MissingInputError {
            field: "gpu".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::Low);
        assert_eq!(missing.exit_code(), 4);

        let io = ConfiguratorError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), 3);

        let config = ConfiguratorError::MissingConfigError {
            field: "catalog.source".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert_ne!(ConfiguratorError::FormatError(std::fmt::Error).exit_code(), 0);
    }

    #[test]
    fn test_fmt_error_propagates_as_format_error() {
        fn failing() -> Result<()> {
            Err(std::fmt::Error)?;
            Ok(())
        }

        let err = failing().unwrap_err();
        assert!(matches!(err, ConfiguratorError::FormatError(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
    }
}
