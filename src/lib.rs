//! Build a container image once and publish it under many tags.
//!
//! This library provides the pieces behind the `build_images` command:
//! - validation of the build request
//! - expansion of a semantic version into `X.Y.Z`, `X.Y` and `X` tags
//! - a deterministic, duplicate-free tag plan
//! - sequencing of build, tag and push against an image engine
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod engine;
pub mod error;
pub mod publisher;

// Re-export commonly used types
pub use error::{EngineError, PublishError, Result, ValidationError};
