//! Image engine integration.
//!
//! The publisher talks to the container engine only through [`ImageEngine`]:
//! one build, then a tag and a push per published tag. Implementations:
//!
//! - [`DockerEngine`] - runs the engine binary (`docker`, `podman`, ...)
//! - [`DryRunEngine`] - prints the commands instead of running them

mod command;
mod config;
mod docker;
mod dry_run;
#[cfg(test)]
pub(crate) mod recording;

use crate::error::EngineError;
use std::path::Path;

pub use command::{build_args, push_args, render, tag_args};
pub use config::{DEFAULT_ENGINE, ENGINE_ENV};
pub use docker::DockerEngine;
pub use dry_run::DryRunEngine;

/// Arguments for the single build call of a run.
#[derive(Debug, Clone, Copy)]
pub struct BuildInvocation<'a> {
    /// Reference the built image is tagged with, `<image>:build`
    pub reference: &'a str,
    /// Build context directory
    pub context_dir: &'a Path,
    /// Dockerfile already resolved against `context_dir`
    pub dockerfile: Option<&'a Path>,
    /// `key=value` labels in the order given
    pub labels: &'a [String],
}

/// Build, tag and push capability of a container engine.
///
/// Calls are made strictly one at a time; an `Err` from any of them ends
/// the run.
#[allow(async_fn_in_trait)]
pub trait ImageEngine {
    async fn build(&self, invocation: &BuildInvocation<'_>) -> Result<(), EngineError>;

    async fn tag(&self, source_ref: &str, target: &str) -> Result<(), EngineError>;

    async fn push(&self, reference: &str) -> Result<(), EngineError>;
}
