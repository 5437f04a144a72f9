//! Resolution of a request to a concrete resource.
//!
//! Direct ids (and requests without a locator) resolve against the caller's
//! own resources. Otherwise the locator's authority names a package, and the
//! path is either `/<id>` or `/<type>/<name>`.
//!
//! A `/<type>/<name>` lookup that finds nothing resolves to id 0 rather than
//! failing here; the decode of id 0 is what reports the miss.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::LoadError;
use crate::locator::Locator;
use crate::platform::{Context, ResourceContainer};
use crate::request::Request;

/// A resolved `(container, id)` pair, valid for one load.
#[derive(Clone)]
pub struct ResourceReference {
    pub container: Arc<dyn ResourceContainer>,
    pub id: i32,
}

impl fmt::Debug for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceReference")
            .field("package", &self.container.package_name())
            .field("id", &format_args!("{:#x}", self.id))
            .finish()
    }
}

/// Resolve both the container and the id for `request`.
pub fn resolve(context: &dyn Context, request: &Request) -> Result<ResourceReference, LoadError> {
    let container = resolve_container(context, request)?;
    let id = resolve_id(container.as_ref(), request)?;
    debug!(package = container.package_name(), id, "resolved resource");
    Ok(ResourceReference { container, id })
}

/// Find the resource container that owns the requested resource.
///
/// # Errors
///
/// - `LoadError::MissingAuthority` if the locator names no package
/// - `LoadError::PackageNotFound` if the registry does not know the package
pub fn resolve_container(
    context: &dyn Context,
    request: &Request,
) -> Result<Arc<dyn ResourceContainer>, LoadError> {
    let Some(locator) = identity_locator(request) else {
        return Ok(context.resources());
    };
    let package = package_of(locator)?;

    trace!(package, "looking up package resources");
    context
        .package_registry()
        .resources_for_package(package)
        .ok_or_else(|| LoadError::PackageNotFound(locator.to_string()))
}

/// Find the numeric id of the requested resource inside `container`.
///
/// # Errors
///
/// - `LoadError::MissingAuthority` if the locator names no package
/// - `LoadError::EmptyPath` for a locator without path segments
/// - `LoadError::InvalidIdSegment` if a single segment is not an integer
/// - `LoadError::TooManyPathSegments` for more than two segments
pub fn resolve_id(container: &dyn ResourceContainer, request: &Request) -> Result<i32, LoadError> {
    let Some(locator) = identity_locator(request) else {
        return Ok(request.resource_id);
    };
    let package = package_of(locator)?;

    match locator.path_segments() {
        [] => Err(LoadError::EmptyPath(locator.to_string())),
        [id] => id
            .parse::<i32>()
            .map_err(|_| LoadError::InvalidIdSegment(locator.to_string())),
        [kind, name] => {
            let id = container.identifier(name, kind, package);
            if id == 0 {
                debug!(
                    package,
                    kind = kind.as_str(),
                    name = name.as_str(),
                    "no resource with this name"
                );
            }
            Ok(id)
        }
        _ => Err(LoadError::TooManyPathSegments(locator.to_string())),
    }
}

/// The locator that defines identity, if the request has no direct id.
fn identity_locator(request: &Request) -> Option<&Locator> {
    if request.resource_id != 0 {
        return None;
    }
    request.locator.as_ref()
}

fn package_of(locator: &Locator) -> Result<&str, LoadError> {
    locator
        .authority()
        .ok_or_else(|| LoadError::MissingAuthority(locator.to_string()))
}
