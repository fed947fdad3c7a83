use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument errors are reported by clap itself with code 2; every failure that
/// happens before the server starts serving maps to `ApplicationError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Server shut down cleanly
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Graph construction, configuration, or listener error
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dependency-graph navigator.
///
/// Construction-time variants are fatal and abort startup. `RenderFailed` is the
/// only per-request variant; it is turned into a diagnostic response body and
/// never stops the server.
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("Malformed edge on line {line_number}: {line:?}\n\n💡 Hint: Each line must have the form \"<depender> <dependency>\"")]
    MalformedEdgeLine { line_number: usize, line: String },

    #[error("The edge list from {source_description} contains no edges\n\n💡 Hint: Run the command inside a module root, or pass an edge-list file with --input")]
    EmptyEdgeList { source_description: String },

    /// Composite failure: every cause collected while reading the edge list.
    #[error("Failed to read the edge list from {source_description}:{}", bullet_list(.causes))]
    EdgeSourceFailed {
        source_description: String,
        causes: Vec<String>,
    },

    #[error("Renderer `{renderer}` failed: {details}")]
    RenderFailed { renderer: String, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable edge-list file")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },

    #[error("Failed to bind {address}\nDetails: {details}\n\n💡 Hint: Choose another port with --port, or use 0 for an ephemeral one")]
    BindError { address: String, details: String },
}

impl NavigatorError {
    /// Underlying causes of a composite edge-source failure, empty for every other variant.
    pub fn causes(&self) -> &[String] {
        match self {
            NavigatorError::EdgeSourceFailed { causes, .. } => causes,
            _ => &[],
        }
    }
}

fn bullet_list(causes: &[String]) -> String {
    causes
        .iter()
        .map(|cause| format!("\n  - {}", cause))
        .collect()
}
