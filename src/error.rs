//! Error types for image publishing.
//!
//! Every failure is terminal: nothing is retried and nothing already pushed is
//! rolled back. The `Display` text of each variant is the message the operator
//! sees on standard output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for publishing operations
pub type Result<T> = std::result::Result<T, PublishError>;

/// Main error type for a publishing run
#[derive(Error, Debug)]
pub enum PublishError {
    /// Input rejected before any engine call was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The image engine failed or could not be started
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The program was started without any arguments
    #[error("No arguments supplied")]
    NoArguments,

    /// Writing to the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Process exit status for this error.
    ///
    /// There is no partial-success status: every failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Input validation failures, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Docker image is missing")]
    MissingImage,

    #[error("Directory for build context is missing")]
    MissingContextDir,

    /// Carries the directory exactly as it was supplied
    #[error("Cannot find directory \"{0}\" for build context")]
    ContextDirNotFound(String),

    /// Carries the Dockerfile path resolved against the context directory
    #[error("Dockerfile '{}' is missing", .0.display())]
    DockerfileNotFound(PathBuf),
}

/// Failures reported by, or while talking to, the image engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine binary could not be located
    #[error("Image engine '{engine}' not found: {reason}")]
    NotFound {
        /// Program name or path that was looked up
        engine: String,
        /// Reason for the error
        reason: String,
    },

    /// The engine process could not be spawned or awaited
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },

    #[error("Failed to build image {reference}: {reason}")]
    BuildFailed { reference: String, reason: String },

    #[error("Failed to tag image {source_ref} as {target}: {reason}")]
    TagFailed {
        source_ref: String,
        target: String,
        reason: String,
    },

    #[error("Failed to push image {reference}: {reason}")]
    PushFailed { reference: String, reason: String },
}
