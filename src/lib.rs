//! AIMOS command-line front end
//!
//! Exposes the static agent roster of the AI-Model Marketplace OS and the
//! `aimos` command table that reports on it.

pub mod agents;
pub mod cli;
pub mod config;

/// Application-wide error types
#[derive(Debug, thiserror::Error)]
pub enum AimosError {
    #[error("Unknown command: {}", args.join(" "))]
    UnknownCommand { args: Vec<String> },

    #[error("Configuration error: {message}")]
    Configuration { message: String, path: Option<String> },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl AimosError {
    /// Create an unknown command error from the unrecognized arguments
    pub fn unknown_command(args: Vec<String>) -> Self {
        Self::UnknownCommand { args }
    }

    /// Create a configuration error with optional file path
    pub fn configuration(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }

    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AimosError::UnknownCommand { .. } => 1,
            AimosError::Configuration { .. } => 1,
            AimosError::Io { .. } => 1,
            AimosError::Serialization { .. } => 1,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AimosError::UnknownCommand { args } => {
                format!(
                    "❌ Unknown command: {}\nRun 'aimos --help' for usage.",
                    args.join(" ")
                )
            }
            AimosError::Configuration { message, path } => {
                if let Some(p) = path {
                    format!("Configuration issue ({}): {}", p, message)
                } else {
                    format!("Configuration issue: {}", message)
                }
            }
            AimosError::Io { source } => {
                format!("Output error: {}", source)
            }
            AimosError::Serialization { source } => {
                format!("Data format error: {}", source)
            }
        }
    }
}

/// Convenience type alias for Results
pub type AimosResult<T> = Result<T, AimosError>;
