//! Command line argument parsing.
//!
//! Short options only for the build inputs, `-t` and
//! `-l` repeatable. `-i` and `-d` are optional at the parser level so that a
//! missing value is reported with the validator's message.

use clap::Parser;

use crate::engine::{DEFAULT_ENGINE, ENGINE_ENV};
use crate::publisher::BuildRequest;

/// Build a container image once and push it under every requested tag
#[derive(Parser, Debug)]
#[command(
    name = "build_images",
    version,
    about = "Build a container image once and push it under every requested tag",
    long_about = "Builds <IMAGE>:build from the context directory, then tags and pushes it
under each -t tag. With -s, the full version, MAJOR.MINOR and MAJOR are
pushed as well. Without -t or -s the image is pushed as \"latest\".

Usage:
  build_images -i registry.example.com/app -d .
  build_images -i app -d ./docker -f Dockerfile.prod -t stable -s 1.2.3
  build_images -i app -d . -l org.opencontainers.image.revision=abc123

Exit code 0 = every tag was pushed."
)]
pub struct Args {
    /// Image name, without tag
    #[arg(short = 'i', value_name = "IMAGE")]
    pub image: Option<String>,

    /// Build context directory
    #[arg(short = 'd', value_name = "DIR")]
    pub dir: Option<String>,

    /// Dockerfile path, relative to the build context directory
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<String>,

    /// Tag to push (repeatable)
    #[arg(short = 't', value_name = "TAG")]
    pub tags: Vec<String>,

    /// Image label (repeatable)
    #[arg(short = 'l', value_name = "KEY=VALUE")]
    pub labels: Vec<String>,

    /// Semantic version; also pushes MAJOR.MINOR and MAJOR tags
    #[arg(short = 's', value_name = "VERSION")]
    pub semver: Option<String>,

    /// Container engine binary (docker, podman, or a path)
    #[arg(long, env = ENGINE_ENV, default_value = DEFAULT_ENGINE, value_name = "PROGRAM")]
    pub engine: String,

    /// Print the engine commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print additional detail
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Hide engine output and the final summary
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// The publishing request described by these arguments.
    pub fn to_request(&self) -> BuildRequest {
        BuildRequest::default()
            .with_image_name(self.image.clone())
            .with_context_dir(self.dir.clone())
            .with_dockerfile(self.file.clone())
            .with_tags(self.tags.clone())
            .with_labels(self.labels.clone())
            .with_version(self.semver.clone())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
    engine: String,
    dry_run: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
            engine: args.engine.clone(),
            dry_run: args.dry_run,
        }
    }
}

impl RuntimeConfig {
    /// Configuration with an explicit output manager.
    pub fn new(output: super::OutputManager, engine: impl Into<String>, dry_run: bool) -> Self {
        Self {
            output,
            engine: engine.into(),
            dry_run,
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Engine program name or path
    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
