//! Engine backed by a `docker`-compatible command line binary.

use crate::cli::OutputManager;
use crate::error::EngineError;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::sync::OnceLock;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use super::command::{build_args, push_args, render, tag_args};
use super::config::STDERR_TAIL_LINES;
use super::{BuildInvocation, ImageEngine};

/// Runs build, tag and push through the engine binary.
///
/// The binary is looked up on `PATH` on first use, so constructing the engine
/// never fails and a run rejected by validation never needs one.
pub struct DockerEngine {
    engine: String,
    program: OnceLock<Result<PathBuf, String>>,
    output: OutputManager,
}

/// Exit status of one engine call plus the end of its stderr.
struct CommandOutcome {
    status: ExitStatus,
    stderr_tail: Vec<String>,
}

impl CommandOutcome {
    fn failure_reason(&self) -> String {
        let status = match self.status.code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        if self.stderr_tail.is_empty() {
            status
        } else {
            format!("{}\n{}", status, self.stderr_tail.join("\n"))
        }
    }
}

impl DockerEngine {
    /// Creates an engine for `engine`, a program name or path.
    pub fn new(engine: impl Into<String>, output: OutputManager) -> Self {
        Self {
            engine: engine.into(),
            program: OnceLock::new(),
            output,
        }
    }

    /// Resolves the engine binary, caching the result for later calls.
    fn program(&self) -> Result<&Path, EngineError> {
        self.program
            .get_or_init(|| match which::which(&self.engine) {
                Ok(path) => {
                    log::debug!("Found {} at: {}", self.engine, path.display());
                    Ok(path)
                }
                Err(e) => Err(e.to_string()),
            })
            .as_deref()
            .map_err(|reason| EngineError::NotFound {
                engine: self.engine.clone(),
                reason: reason.clone(),
            })
    }

    /// Runs the engine with `args`, streaming its output line by line.
    async fn execute(&self, args: &[String]) -> Result<CommandOutcome, EngineError> {
        let program = self.program()?;
        let command_line = render(&self.engine, args);
        log::debug!("Running: {}", command_line);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::ExecutionFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let mut stderr_tail = VecDeque::with_capacity(STDERR_TAIL_LINES);

        // Drain both pipes concurrently so neither can fill up and block the engine
        tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    relay_lines(stdout, &self.output, |_| {}).await;
                }
            },
            async {
                if let Some(stderr) = stderr {
                    relay_lines(stderr, &self.output, |line| {
                        if stderr_tail.len() == STDERR_TAIL_LINES {
                            stderr_tail.pop_front();
                        }
                        stderr_tail.push_back(line.to_string());
                    })
                    .await;
                }
            }
        );

        let status = child
            .wait()
            .await
            .map_err(|e| EngineError::ExecutionFailed {
                command: command_line,
                reason: e.to_string(),
            })?;

        Ok(CommandOutcome {
            status,
            stderr_tail: stderr_tail.into(),
        })
    }
}

/// Relays `reader` line by line until EOF.
///
/// Lines are decoded lossily and the pipe is read to the end even if relaying
/// fails, so the engine never writes into a closed pipe.
async fn relay_lines<R, F>(reader: R, output: &OutputManager, mut on_line: F)
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut relaying = true;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::debug!("Stopped reading engine output: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if relaying && let Err(e) = output.indent(line) {
            log::debug!("Stopped relaying engine output: {}", e);
            relaying = false;
        }
        on_line(line);
    }
}

impl ImageEngine for DockerEngine {
    async fn build(&self, invocation: &BuildInvocation<'_>) -> Result<(), EngineError> {
        let outcome = self.execute(&build_args(invocation)).await?;
        if !outcome.status.success() {
            return Err(EngineError::BuildFailed {
                reference: invocation.reference.to_string(),
                reason: outcome.failure_reason(),
            });
        }
        Ok(())
    }

    async fn tag(&self, source_ref: &str, target: &str) -> Result<(), EngineError> {
        let outcome = self.execute(&tag_args(source_ref, target)).await?;
        if !outcome.status.success() {
            return Err(EngineError::TagFailed {
                source_ref: source_ref.to_string(),
                target: target.to_string(),
                reason: outcome.failure_reason(),
            });
        }
        Ok(())
    }

    async fn push(&self, reference: &str) -> Result<(), EngineError> {
        let outcome = self.execute(&push_args(reference)).await?;
        if !outcome.status.success() {
            return Err(EngineError::PushFailed {
                reference: reference.to_string(),
                reason: outcome.failure_reason(),
            });
        }
        Ok(())
    }
}
