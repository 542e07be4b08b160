//! Command line interface for build_images.
//!
//! Parses arguments into a [`BuildRequest`], picks an engine and runs the
//! publisher. Every failure is reported on standard output and turned into
//! exit code 1.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::engine::{DockerEngine, DryRunEngine, ImageEngine};
use crate::error::{PublishError, Result};
use crate::publisher::{BuildRequest, Publisher};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_from(std::env::args_os()).await
}

/// Runs the CLI with an explicit argument vector, program name first.
pub async fn run_from<I, T>(argv: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    if argv.len() <= 1 {
        let output = OutputManager::new(false, false);
        output.block(&Args::command().render_help().to_string())?;
        return Ok(PublishError::NoArguments.exit_code());
    }

    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(code);
        }
    };

    let config = RuntimeConfig::from(&args);
    execute(&config, &args.to_request()).await
}

/// Publishes `request` with the engine selected by `config`.
pub async fn execute(config: &RuntimeConfig, request: &BuildRequest) -> Result<i32> {
    if config.dry_run() {
        let engine = DryRunEngine::new(config.engine(), config.output().clone());
        publish_with(&engine, config, request).await
    } else {
        let engine = DockerEngine::new(config.engine(), config.output().clone());
        publish_with(&engine, config, request).await
    }
}

async fn publish_with<E: ImageEngine>(
    engine: &E,
    config: &RuntimeConfig,
    request: &BuildRequest,
) -> Result<i32> {
    match Publisher::new(engine, config.output()).publish(request).await {
        Ok(_) => Ok(0),
        Err(PublishError::Io(e)) => Err(e.into()),
        Err(e) => {
            config.output().error(&e.to_string())?;
            Ok(e.exit_code())
        }
    }
}
