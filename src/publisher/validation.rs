//! Input validation performed before the image engine is touched.

use std::path::{Component, Path, PathBuf};

use crate::error::ValidationError;

use super::request::{BuildRequest, BuildTarget};

/// Checks a request and resolves its paths.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. image name present and non-empty
/// 2. context directory present and non-empty
/// 3. context directory exists as a directory
/// 4. Dockerfile, when given, exists as a regular file under the context directory
pub fn validate(request: &BuildRequest) -> Result<BuildTarget, ValidationError> {
    let image_name = match request.image_name() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingImage),
    };

    let context_dir = match request.context_dir_str() {
        Some(dir) if !dir.is_empty() => dir,
        _ => return Err(ValidationError::MissingContextDir),
    };

    let context_path = PathBuf::from(context_dir);
    if !context_path.is_dir() {
        return Err(ValidationError::ContextDirNotFound(context_dir.to_string()));
    }

    let dockerfile = match request.dockerfile() {
        Some(file) => {
            let resolved = context_path.join(under_context(file));
            if !resolved.is_file() {
                return Err(ValidationError::DockerfileNotFound(resolved));
            }
            Some(resolved)
        }
        None => None,
    };

    for label in request.labels() {
        if !label.contains('=') {
            log::warn!("Label '{}' is not in key=value form, passing it through", label);
        }
    }

    Ok(BuildTarget {
        image_name: image_name.to_string(),
        context_dir: context_path,
        dockerfile,
    })
}

/// `file` with any root or drive prefix removed, so joining it onto the
/// context directory never escapes to an absolute location.
fn under_context(file: &str) -> PathBuf {
    Path::new(file)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}
