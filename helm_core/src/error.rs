//! Unified error handling for HELM
//!
//! Selection itself never fails: a missing or unknown controller yields the
//! empty operator interface plus a raised alert. Errors only come from the
//! ambient layers around it (configuration loading, driver lifecycle).

use thiserror::Error;

/// Main error type for HELM operations
#[derive(Debug, Error)]
pub enum HelmError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Driver-related errors
    #[error("Driver error: {0}")]
    Driver(String),

    /// Serialization/Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Feature not available errors
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// Generic internal errors (use sparingly)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Catch-all for other error types
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using HelmError
pub type HelmResult<T> = Result<T, HelmError>;

impl From<serde_json::Error> for HelmError {
    fn from(err: serde_json::Error) -> Self {
        HelmError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for HelmError {
    fn from(err: toml::de::Error) -> Self {
        HelmError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for HelmError {
    fn from(err: toml::ser::Error) -> Self {
        HelmError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_yaml::Error> for HelmError {
    fn from(err: serde_yaml::Error) -> Self {
        HelmError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<&str> for HelmError {
    fn from(msg: &str) -> Self {
        HelmError::Other(msg.to_string())
    }
}

impl From<String> for HelmError {
    fn from(msg: String) -> Self {
        HelmError::Other(msg)
    }
}

// Helper methods
impl HelmError {
    /// Create a configuration error with a custom message
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HelmError::Config(msg.into())
    }

    /// Create a driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        HelmError::Driver(msg.into())
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        HelmError::NotFound(resource.into())
    }

    /// Create a feature-not-available error
    pub fn feature_not_available<S: Into<String>>(feature: S) -> Self {
        HelmError::FeatureNotAvailable(feature.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, HelmError::NotFound(_))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, HelmError::Config(_))
    }
}
