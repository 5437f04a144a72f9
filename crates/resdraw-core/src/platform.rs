//! Capabilities the loader calls into.
//!
//! A [`Context`] gives access to the caller's own resources and to a
//! [`PackageRegistry`] for resolving other packages. Each
//! [`ResourceContainer`] can probe, decode and hand out drawables for the
//! resources it owns. All of these are shared read-only between concurrent
//! loads, hence the `Send + Sync` bounds.

use std::sync::Arc;

use crate::decode::{Bitmap, DecodeOptions};
use crate::error::LoadError;
use crate::raster::Drawable;

/// Native dimensions reported by a bounds-only probe.
///
/// Resources that are not raster-decodable probe as 0x0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsInfo {
    pub width: u32,
    pub height: u32,
}

impl BoundsInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A set of resources owned by one package.
pub trait ResourceContainer: Send + Sync {
    /// Name of the package that owns this container.
    fn package_name(&self) -> &str;

    /// Look up a resource id by name and type; 0 when there is none.
    fn identifier(&self, name: &str, kind: &str, package: &str) -> i32;

    /// Report native dimensions without allocating pixels.
    fn decode_bounds(&self, id: i32) -> Result<BoundsInfo, LoadError>;

    /// Decode to pixels.
    ///
    /// `None` options mean full resolution in the decoder's default layout.
    /// Returns `Ok(None)` when the resource is not raster-decodable.
    fn decode(&self, id: i32, options: Option<&DecodeOptions>)
        -> Result<Option<Bitmap>, LoadError>;

    /// The drawable form of a resource, for rasterization.
    fn drawable(&self, id: i32) -> Result<Box<dyn Drawable>, LoadError>;
}

/// Resolves package names to their resource containers.
pub trait PackageRegistry: Send + Sync {
    fn resources_for_package(&self, package: &str) -> Option<Arc<dyn ResourceContainer>>;
}

/// The caller's environment for a load.
pub trait Context: Send + Sync {
    /// The caller's own package name.
    fn package_name(&self) -> &str;

    /// The caller's own resources, used for direct ids.
    fn resources(&self) -> Arc<dyn ResourceContainer>;

    fn package_registry(&self) -> &dyn PackageRegistry;
}
