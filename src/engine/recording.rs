//! In-memory engine that records calls, for tests.

use crate::error::EngineError;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{BuildInvocation, ImageEngine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Build {
        reference: String,
        context_dir: PathBuf,
        dockerfile: Option<PathBuf>,
        labels: Vec<String>,
    },
    Tag {
        source_ref: String,
        target: String,
    },
    Push {
        reference: String,
    },
}

/// Which call, if any, should fail.
#[derive(Debug, Clone, Default)]
pub enum FailOn {
    #[default]
    Nothing,
    Build,
    Tag(String),
    Push(String),
}

#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<EngineCall>>,
    fail_on: FailOn,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ImageEngine for RecordingEngine {
    async fn build(&self, invocation: &BuildInvocation<'_>) -> Result<(), EngineError> {
        self.record(EngineCall::Build {
            reference: invocation.reference.to_string(),
            context_dir: invocation.context_dir.to_path_buf(),
            dockerfile: invocation.dockerfile.map(|p| p.to_path_buf()),
            labels: invocation.labels.to_vec(),
        });
        if matches!(self.fail_on, FailOn::Build) {
            return Err(EngineError::BuildFailed {
                reference: invocation.reference.to_string(),
                reason: "exit code 1".to_string(),
            });
        }
        Ok(())
    }

    async fn tag(&self, source_ref: &str, target: &str) -> Result<(), EngineError> {
        self.record(EngineCall::Tag {
            source_ref: source_ref.to_string(),
            target: target.to_string(),
        });
        if matches!(&self.fail_on, FailOn::Tag(t) if t == target) {
            return Err(EngineError::TagFailed {
                source_ref: source_ref.to_string(),
                target: target.to_string(),
                reason: "exit code 1".to_string(),
            });
        }
        Ok(())
    }

    async fn push(&self, reference: &str) -> Result<(), EngineError> {
        self.record(EngineCall::Push {
            reference: reference.to_string(),
        });
        if matches!(&self.fail_on, FailOn::Push(r) if r == reference) {
            return Err(EngineError::PushFailed {
                reference: reference.to_string(),
                reason: "exit code 1".to_string(),
            });
        }
        Ok(())
    }
}
