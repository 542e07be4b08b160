//! Expansion of a semantic version string into derived tags.
//!
//! This is a textual transform on dot-separated components. Nothing is parsed
//! as a number, and pre-release or build suffixes are carried along as-is.

/// Tags derived from one version string, most specific first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTags {
    /// The version unchanged, e.g. `1.2.3`
    pub full: String,
    /// First two components, e.g. `1.2`
    pub minor: String,
    /// First component, e.g. `1`
    pub major: String,
}

impl VersionTags {
    /// `[full, minor, major]`, in publishing order.
    pub fn into_array(self) -> [String; 3] {
        [self.full, self.minor, self.major]
    }
}

/// Expands `version` into its full, `major.minor` and `major` tags.
///
/// Missing trailing components are left out rather than filled with zero, so
/// `"1.2"` yields `1.2`, `1.2`, `1` and `"1"` yields `1` three times. Callers
/// deduplicate.
pub fn expand(version: &str) -> VersionTags {
    let components: Vec<&str> = version.splitn(3, '.').collect();

    let minor = components
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(".");
    let major = components.first().copied().unwrap_or_default().to_string();

    VersionTags {
        full: version.to_string(),
        minor,
        major,
    }
}
