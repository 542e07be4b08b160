//! Sequencing of validate, build, tag and push.

use std::fmt;

use crate::cli::OutputManager;
use crate::engine::{BuildInvocation, ImageEngine};
use crate::error::Result;

use super::plan::{TagOrigin, build_plan};
use super::request::BuildRequest;
use super::validation::validate;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStage {
    Validating,
    Building,
    /// Index into the tag plan
    Tagging(usize),
    Done,
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishStage::Validating => write!(f, "validating"),
            PublishStage::Building => write!(f, "building"),
            PublishStage::Tagging(index) => write!(f, "tagging #{}", index + 1),
            PublishStage::Done => write!(f, "done"),
        }
    }
}

/// What a successful run published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    /// Intermediate `<image>:build` reference
    pub build_reference: String,
    /// Pushed references, in push order
    pub published: Vec<String>,
}

/// Drives one run against an [`ImageEngine`].
///
/// Holds no state between runs: the same request always produces the same
/// engine calls and the same output.
pub struct Publisher<'a, E> {
    engine: &'a E,
    output: &'a OutputManager,
}

impl<'a, E: ImageEngine> Publisher<'a, E> {
    pub fn new(engine: &'a E, output: &'a OutputManager) -> Self {
        Self { engine, output }
    }

    /// Validates, builds once, then tags and pushes every planned tag.
    ///
    /// The first failure stops the run. Tags pushed before it stay pushed.
    pub async fn publish(&self, request: &BuildRequest) -> Result<PublishSummary> {
        let mut stage = PublishStage::Validating;
        let result = self.run(request, &mut stage).await;
        if let Err(e) = &result {
            log::debug!("Publishing failed while {}: {}", stage, e);
        }
        result
    }

    async fn run(
        &self,
        request: &BuildRequest,
        stage: &mut PublishStage,
    ) -> Result<PublishSummary> {
        self.enter(stage, PublishStage::Validating);
        let target = validate(request)?;
        let plan = build_plan(request.tags(), request.version());
        log::debug!("Tag plan for {}: {:?}", target.image_name, plan.names());

        self.enter(stage, PublishStage::Building);
        let build_reference = target.build_reference();
        self.output.verbose(&format!(
            "Building {} from {}",
            build_reference,
            target.context_dir.display()
        ))?;
        self.engine
            .build(&BuildInvocation {
                reference: &build_reference,
                context_dir: &target.context_dir,
                dockerfile: target.dockerfile.as_deref(),
                labels: request.labels(),
            })
            .await?;

        let mut published = Vec::with_capacity(plan.len());
        let mut version_announced = false;

        for (index, tag) in plan.iter().enumerate() {
            self.enter(stage, PublishStage::Tagging(index));

            if tag.origin == TagOrigin::Version && !version_announced {
                if let Some(version) = plan.version() {
                    self.output.progress(&format!(
                        "Adding tags for semantic version \"{}\"",
                        version
                    ))?;
                }
                version_announced = true;
            }

            self.output.progress(&format!(
                "Tagging and pushing image with tag \"{}\"",
                tag.name
            ))?;

            let reference = target.reference(&tag.name);
            self.engine.tag(&build_reference, &reference).await?;
            self.engine.push(&reference).await?;
            published.push(reference);
        }

        self.enter(stage, PublishStage::Done);
        self.output.success(&format!(
            "Published {} tag(s) for image \"{}\"",
            published.len(),
            target.image_name
        ))?;

        Ok(PublishSummary {
            build_reference,
            published,
        })
    }

    fn enter(&self, stage: &mut PublishStage, next: PublishStage) {
        log::debug!("Publish stage: {}", next);
        *stage = next;
    }
}
