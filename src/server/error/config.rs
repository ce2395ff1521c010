use thiserror::Error;

/// Failures while reading configuration or preparing logging at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The log file or its parent directory could not be prepared.
    #[error("Failed to prepare log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A global tracing subscriber was already installed or the filter was invalid.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
