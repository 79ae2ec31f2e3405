// Error types for the route table loader

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading file {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Failed to parse: buffer is empty")]
    EmptyBuffer,

    #[error("Routing table has no routes")]
    EmptyTable,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileRead { path, .. } => {
                format!("Could not read {}. Check that it exists and is readable.", path.display())
            }
            AppError::FileWrite { path, .. } => {
                format!("Could not write {}. Check permissions and disk space.", path.display())
            }
            AppError::Decode(_) | AppError::EmptyBuffer => {
                "The data file is not a valid encoded routing table.".to_string()
            }
            AppError::EmptyTable => {
                "The routing table is empty, there is no first route.".to_string()
            }
            AppError::Config(_) => {
                "Configuration error. Check your config file or command-line arguments.".to_string()
            }
        }
    }

    /// True for every failure to turn bytes into a routing table
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode(_) | AppError::EmptyBuffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_classification() {
        assert!(AppError::EmptyBuffer.is_decode());
        assert!(!AppError::EmptyTable.is_decode());
        assert!(!AppError::Config("bad".to_string()).is_decode());
    }

    #[test]
    fn test_file_read_cause_is_chained_not_repeated() {
        let err = AppError::FileRead {
            path: PathBuf::from("routetable.data"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert_eq!(msg, "Error reading file routetable.data");

        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "No such file or directory");
        assert!(err.user_message().contains("routetable.data"));
    }
}
