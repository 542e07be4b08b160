//! Build-once, publish-many orchestration.
//!
//! A run validates a [`BuildRequest`], computes its [`TagPlan`], builds the
//! image once as `<image>:build` and then tags and pushes it under every tag
//! in the plan, in order.
//!
//! # Example
//!
//! ```no_run
//! use build_images::cli::OutputManager;
//! use build_images::engine::DockerEngine;
//! use build_images::publisher::{BuildRequest, Publisher};
//!
//! # async fn example() -> build_images::Result<()> {
//! let output = OutputManager::new(false, false);
//! let engine = DockerEngine::new("docker", output.clone());
//! let request = BuildRequest::new("registry.example.com/app", ".")
//!     .tag("stable")
//!     .with_version(Some("1.2.3".into()));
//!
//! let summary = Publisher::new(&engine, &output).publish(&request).await?;
//! assert_eq!(summary.published.len(), 4);
//! # Ok(())
//! # }
//! ```

mod orchestrator;
mod plan;
mod request;
mod validation;
mod version;

pub use orchestrator::{PublishStage, PublishSummary, Publisher};
pub use plan::{DEFAULT_TAG, PlannedTag, TagOrigin, TagPlan, build_plan};
pub use request::{BuildRequest, BuildTarget};
pub use validation::validate;
pub use version::{VersionTags, expand};

/// Tag of the intermediate image produced by the build step
pub const BUILD_TAG: &str = "build";
