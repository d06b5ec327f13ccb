use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid value for {field}: {value} (accepted values: {allowed})")]
    InvalidEnumValueError {
        field: String,
        value: String,
        allowed: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("API error {code}: {message}")]
    ApiError { code: u16, message: String },

    #[error("Dispatch failed: {message}")]
    DispatchError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
