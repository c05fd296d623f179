//! Error types and exit codes for travel-distance
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, serialization)
//! - 2: Usage error (bad flags, bad query parameters)
//! - 3: Data error (malformed route file, graph in an unusable state)
//!
//! "NO SUCH ROUTE" is a regular query result and never an error.

mod macros;

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the travel-distance binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad route file, invalid graph state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a route graph
#[derive(Error, Debug)]
pub enum TravelError {
    // Usage errors (exit code 2)
    /// Malformed caller input: self-loop edge, bad bound, wrong arity
    #[error("{0}")]
    InvalidArgument(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    /// The graph cannot answer the query as it stands
    #[error("{0}")]
    InvalidState(String),

    #[error("invalid route line {line}: {reason}")]
    InvalidRouteLine { line: usize, reason: String },

    #[error("route file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TravelError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl std::fmt::Display) -> Self {
        TravelError::InvalidArgument(message.to_string())
    }

    /// Create an invalid-state error
    pub fn invalid_state(message: impl std::fmt::Display) -> Self {
        TravelError::InvalidState(message.to_string())
    }

    /// Create an error for a route-file line that cannot be turned into an edge
    pub fn route_line(line: usize, reason: impl std::fmt::Display) -> Self {
        TravelError::InvalidRouteLine {
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TravelError::InvalidArgument(_)
            | TravelError::UnknownFormat(_)
            | TravelError::UsageError(_) => ExitCode::Usage,

            TravelError::InvalidState(_)
            | TravelError::InvalidRouteLine { .. }
            | TravelError::GraphNotFound { .. } => ExitCode::Data,

            TravelError::Io(_) | TravelError::Json(_) | TravelError::Toml(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TravelError::InvalidArgument(_) => "invalid_argument",
            TravelError::UnknownFormat(_) => "unknown_format",
            TravelError::UsageError(_) => "usage_error",
            TravelError::InvalidState(_) => "invalid_state",
            TravelError::InvalidRouteLine { .. } => "invalid_route_line",
            TravelError::GraphNotFound { .. } => "graph_not_found",
            TravelError::Io(_) => "io_error",
            TravelError::Json(_) => "json_error",
            TravelError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let TravelError::InvalidRouteLine { line, .. } = self {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for travel-distance operations
pub type Result<T> = std::result::Result<T, TravelError>;
