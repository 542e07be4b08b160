//! The immutable description of one publishing run.

use std::path::{Path, PathBuf};

/// Everything the operator asked for, captured once at startup.
///
/// Fields are optional where the operator may have left them out; the
/// validator decides whether the omission is fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildRequest {
    image_name: Option<String>,
    context_dir: Option<String>,
    dockerfile: Option<String>,
    tags: Vec<String>,
    labels: Vec<String>,
    version: Option<String>,
}

impl BuildRequest {
    /// Starts a request for `image_name` built from `context_dir`.
    pub fn new(image_name: impl Into<String>, context_dir: impl Into<String>) -> Self {
        Self {
            image_name: Some(image_name.into()),
            context_dir: Some(context_dir.into()),
            ..Default::default()
        }
    }

    /// Sets the image name, or clears it with `None`.
    pub fn with_image_name(mut self, image_name: Option<String>) -> Self {
        self.image_name = image_name;
        self
    }

    /// Sets the build context directory, or clears it with `None`.
    pub fn with_context_dir(mut self, context_dir: Option<String>) -> Self {
        self.context_dir = context_dir;
        self
    }

    /// Sets the Dockerfile path, relative to the context directory.
    pub fn with_dockerfile(mut self, dockerfile: Option<String>) -> Self {
        self.dockerfile = dockerfile;
        self
    }

    /// Appends an explicit tag. Order is preserved.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replaces the explicit tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Appends a `key=value` image label. Order is preserved.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Replaces the image labels.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the semantic version used to derive extra tags.
    ///
    /// An empty string counts as no version.
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version.filter(|v| !v.is_empty());
        self
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }

    pub fn context_dir(&self) -> Option<&Path> {
        self.context_dir.as_deref().map(Path::new)
    }

    /// The context directory exactly as supplied.
    pub fn context_dir_str(&self) -> Option<&str> {
        self.context_dir.as_deref()
    }

    pub fn dockerfile(&self) -> Option<&str> {
        self.dockerfile.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    /// Image name without a tag
    pub image_name: String,
    /// Build context directory as supplied
    pub context_dir: PathBuf,
    /// Dockerfile path resolved against `context_dir`
    pub dockerfile: Option<PathBuf>,
}

impl BuildTarget {
    /// Tag of the intermediate image every published tag is copied from.
    pub fn build_reference(&self) -> String {
        self.reference(super::BUILD_TAG)
    }

    /// Full `<image>:<tag>` reference for a published tag.
    pub fn reference(&self, tag: &str) -> String {
        format!("{}:{}", self.image_name, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_tag_and_label_order() {
        let request = BuildRequest::new("image", "ctx")
            .tag("b")
            .tag("a")
            .label("z=1")
            .label("y=2");

        assert_eq!(request.tags(), ["b", "a"]);
        assert_eq!(request.labels(), ["z=1", "y=2"]);
    }

    #[test]
    fn empty_version_counts_as_absent() {
        let request = BuildRequest::new("image", "ctx").with_version(Some(String::new()));
        assert_eq!(request.version(), None);
    }

    #[test]
    fn build_reference_uses_build_tag() {
        let target = BuildTarget {
            image_name: "registry.example.com/team/app".into(),
            context_dir: PathBuf::from("."),
            dockerfile: None,
        };
        assert_eq!(target.build_reference(), "registry.example.com/team/app:build");
        assert_eq!(target.reference("1.2"), "registry.example.com/team/app:1.2");
    }
}
