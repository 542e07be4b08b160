//! Tag plan construction.

use super::version;

/// Tag published when the operator gives neither tags nor a version.
pub const DEFAULT_TAG: &str = "latest";

/// Why a tag is part of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOrigin {
    /// Supplied with `-t`
    Explicit,
    /// Fallback when nothing else was requested
    Default,
    /// Derived from the semantic version
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTag {
    pub name: String,
    pub origin: TagOrigin,
}

/// Ordered, duplicate-free list of tags to apply and push.
///
/// Explicit tags come first in the order given, followed by the full,
/// `major.minor` and `major` version tags. A tag that is already present is
/// not added again, so each tag is pushed exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPlan {
    tags: Vec<PlannedTag>,
    version: Option<String>,
}

impl TagPlan {
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tag names in publishing order.
    pub fn names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// The version the derived tags came from, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn push(&mut self, name: &str, origin: TagOrigin) {
        // Empty names cannot form a valid reference
        if name.is_empty() || self.tags.iter().any(|t| t.name == name) {
            return;
        }
        self.tags.push(PlannedTag {
            name: name.to_string(),
            origin,
        });
    }
}

impl<'a> IntoIterator for &'a TagPlan {
    type Item = &'a PlannedTag;
    type IntoIter = std::slice::Iter<'a, PlannedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds the tag plan from explicit tags and an optional version.
pub fn build_plan(tags: &[String], version: Option<&str>) -> TagPlan {
    let version = version.filter(|v| !v.is_empty());
    let mut plan = TagPlan {
        tags: Vec::with_capacity(tags.len() + 3),
        version: version.map(str::to_string),
    };

    for tag in tags {
        plan.push(tag, TagOrigin::Explicit);
    }

    match version {
        Some(version) => {
            for tag in version::expand(version).into_array() {
                plan.push(&tag, TagOrigin::Version);
            }
        }
        None if plan.is_empty() => plan.push(DEFAULT_TAG, TagOrigin::Default),
        None => {}
    }

    plan
}
