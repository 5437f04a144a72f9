//! Error types for resource resolution and loading.

use thiserror::Error;

/// Error types for resource loading operations.
///
/// Locator variants carry the rendered locator text so callers can report
/// which request failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The locator names no package.
    #[error("No package provided: {0}")]
    MissingAuthority(String),

    /// The named package has no resolvable resource container.
    #[error("Unable to obtain resources for package: {0}")]
    PackageNotFound(String),

    /// The locator has no path segments.
    #[error("No path segments: {0}")]
    EmptyPath(String),

    /// A single path segment that is not a base-10 resource id.
    #[error("Last path segment is not a resource ID: {0}")]
    InvalidIdSegment(String),

    /// More than `/<type>/<name>` was given.
    #[error("More than two path segments: {0}")]
    TooManyPathSegments(String),

    /// The text could not be parsed as a locator at all.
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    /// No registered handler accepts the request.
    #[error("No handler for request: {0}")]
    NoHandler(String),

    /// The container holds nothing under this id.
    #[error("Resource not found: {0:#x}")]
    ResourceNotFound(i32),

    /// The resource bytes are in a format the decoder does not support.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The resource bytes are corrupted or incomplete.
    #[error("Corrupted or incomplete resource: {0}")]
    CorruptedResource(String),

    /// A pixel buffer of this size could not be allocated.
    #[error("Failed to allocate {width}x{height} pixel buffer")]
    AllocationFailed { width: u32, height: u32 },
}

impl From<image::ImageError> for LoadError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(_) => LoadError::InvalidFormat,
            other => LoadError::CorruptedResource(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_error_display() {
        let err = LoadError::TooManyPathSegments("android.resource://pkg/a/b/c".to_string());
        assert_eq!(
            err.to_string(),
            "More than two path segments: android.resource://pkg/a/b/c"
        );

        let err = LoadError::MissingAuthority("android.resource:42".to_string());
        assert_eq!(err.to_string(), "No package provided: android.resource:42");
    }

    #[test]
    fn test_resource_not_found_display_hex() {
        let err = LoadError::ResourceNotFound(0x7f01_0000);
        assert_eq!(err.to_string(), "Resource not found: 0x7f010000");
    }

    #[test]
    fn test_allocation_failed_display() {
        let err = LoadError::AllocationFailed {
            width: 10,
            height: 0,
        };
        assert_eq!(err.to_string(), "Failed to allocate 10x0 pixel buffer");
    }
}
