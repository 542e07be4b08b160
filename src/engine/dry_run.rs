//! Engine that reports what it would run without running anything.

use crate::cli::OutputManager;
use crate::error::EngineError;

use super::command::{build_args, push_args, render, tag_args};
use super::{BuildInvocation, ImageEngine};

pub struct DryRunEngine {
    engine: String,
    output: OutputManager,
}

impl DryRunEngine {
    pub fn new(engine: impl Into<String>, output: OutputManager) -> Self {
        Self {
            engine: engine.into(),
            output,
        }
    }

    fn report(&self, args: &[String]) -> Result<(), EngineError> {
        let command_line = render(&self.engine, args);
        self.output
            .progress(&format!("[dry-run] {}", command_line))
            .map_err(|e| EngineError::ExecutionFailed {
                command: command_line,
                reason: e.to_string(),
            })
    }
}

impl ImageEngine for DryRunEngine {
    async fn build(&self, invocation: &BuildInvocation<'_>) -> Result<(), EngineError> {
        self.report(&build_args(invocation))
    }

    async fn tag(&self, source_ref: &str, target: &str) -> Result<(), EngineError> {
        self.report(&tag_args(source_ref, target))
    }

    async fn push(&self, reference: &str) -> Result<(), EngineError> {
        self.report(&push_args(reference))
    }
}
