//! Typed error handling for listwise
//!
//! The query engine itself is a total function over in-memory data and has no
//! failure modes; everything that can fail lives at the HTTP and configuration
//! boundaries. This module gives those boundaries a typed hierarchy so callers
//! can handle failures specifically instead of matching on strings.
//!
//! # Error Categories
//!
//! - [`ApiError`]: errors from the REST backend (failed responses, transport,
//!   body decoding)
//! - [`ConfigError`]: errors loading or resolving dashboard configuration
//!
//! # Example
//!
//! ```rust,ignore
//! match client.list().await {
//!     Ok(rows) => view.set_records(rows),
//!     Err(ListwiseError::Api(ApiError::Status { status, message })) => {
//!         // surface the backend's message verbatim
//!         alert(format!("{} ({})", message, status));
//!     }
//!     Err(e) => alert(e.to_string()),
//! }
//! ```

use std::fmt;

/// The main error type for listwise operations
#[derive(Debug)]
pub enum ListwiseError {
    /// Errors from the REST backend
    Api(ApiError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for ListwiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListwiseError::Api(e) => write!(f, "{}", e),
            ListwiseError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ListwiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListwiseError::Api(e) => Some(e),
            ListwiseError::Config(e) => Some(e),
        }
    }
}

impl ListwiseError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ListwiseError::Api(e) => e.error_code(),
            ListwiseError::Config(e) => e.error_code(),
        }
    }

    /// Best-effort message suitable for a user-facing alert
    ///
    /// For failed responses this is the backend's own `message`, surfaced
    /// verbatim; every other variant falls back to its display form.
    pub fn user_message(&self) -> String {
        match self {
            ListwiseError::Api(ApiError::Status { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the REST backend
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status
    Status { status: u16, message: String },

    /// The request never produced a response (connect, timeout, redirect)
    Transport { message: String },

    /// The response body could not be decoded into the expected shape
    Decode { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, message } => {
                write!(f, "Request failed with status {}: {}", status, message)
            }
            ApiError::Transport { message } => {
                write!(f, "Transport error: {}", message)
            }
            ApiError::Decode { message } => {
                write!(f, "Failed to decode response body: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::Transport { .. } => "API_TRANSPORT_ERROR",
            ApiError::Decode { .. } => "API_DECODE_ERROR",
        }
    }
}

impl From<ApiError> for ListwiseError {
    fn from(err: ApiError) -> Self {
        ListwiseError::Api(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to dashboard configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// No resource with the given name is configured
    UnknownResource { name: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::UnknownResource { name } => {
                write!(f, "Unknown resource: {}", name)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<ConfigError> for ListwiseError {
    fn from(err: ConfigError) -> Self {
        ListwiseError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<reqwest::Error> for ListwiseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ListwiseError::Api(ApiError::Decode {
                message: err.to_string(),
            })
        } else {
            ListwiseError::Api(ApiError::Transport {
                message: err.to_string(),
            })
        }
    }
}

impl From<serde_json::Error> for ListwiseError {
    fn from(err: serde_json::Error) -> Self {
        ListwiseError::Api(ApiError::Decode {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ListwiseError {
    fn from(err: serde_yaml::Error) -> Self {
        ListwiseError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ListwiseError {
    fn from(err: std::io::Error) -> Self {
        ListwiseError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for listwise operations
pub type ListwiseResult<T> = Result<T, ListwiseError>;
