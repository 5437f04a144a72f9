//! In-memory implementation of the platform capabilities.
//!
//! Resources are registered per package as encoded raster bytes, SVG
//! documents or solid colors, each under a `(type, name)` pair. Ids are
//! handed out sequentially from [`FIRST_RESOURCE_ID`].
//!
//! - Raster entries probe their bounds from the header and decode with the
//!   `image` crate, subsampled per [`DecodeSettings`]
//! - SVG entries are not raster-decodable: they probe as 0x0, decode to
//!   nothing, and rasterize through [`SvgDrawable`]
//! - Color entries behave like SVG entries but draw a flat fill

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::config::DecodeSettings;
use crate::decode::{decode_bytes, probe_dimensions, Bitmap, DecodeOptions};
use crate::error::LoadError;
use crate::platform::{BoundsInfo, Context, PackageRegistry, ResourceContainer};
use crate::raster::{BitmapDrawable, ColorDrawable, Drawable, SvgDrawable};

/// First id assigned within a package.
pub const FIRST_RESOURCE_ID: i32 = 0x7f01_0000;

#[derive(Debug, Clone)]
enum Resource {
    Raster(Arc<[u8]>),
    Vector(Arc<[u8]>),
    Color {
        rgba: [u8; 4],
        width: u32,
        height: u32,
    },
}

/// Resources of one package.
#[derive(Debug, Clone)]
pub struct MemoryResources {
    package: String,
    settings: DecodeSettings,
    entries: HashMap<i32, Resource>,
    names: HashMap<(String, String), i32>,
    next_id: i32,
}

impl MemoryResources {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            settings: DecodeSettings::default(),
            entries: HashMap::new(),
            names: HashMap::new(),
            next_id: FIRST_RESOURCE_ID,
        }
    }

    pub fn set_settings(&mut self, settings: DecodeSettings) {
        self.settings = settings;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register encoded raster bytes (PNG, JPEG).
    ///
    /// The bytes are only decoded on load.
    pub fn add_raster(&mut self, kind: &str, name: &str, bytes: impl Into<Arc<[u8]>>) -> i32 {
        self.insert(kind, name, Resource::Raster(bytes.into()))
    }

    /// Register an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::CorruptedResource` if the document does not parse.
    pub fn add_svg(
        &mut self,
        kind: &str,
        name: &str,
        svg: impl Into<Arc<[u8]>>,
    ) -> Result<i32, LoadError> {
        let svg = svg.into();
        SvgDrawable::from_data(&svg)?;
        Ok(self.insert(kind, name, Resource::Vector(svg)))
    }

    /// Register a solid color with a natural size (0x0 for none).
    pub fn add_color(
        &mut self,
        kind: &str,
        name: &str,
        rgba: [u8; 4],
        width: u32,
        height: u32,
    ) -> i32 {
        self.insert(
            kind,
            name,
            Resource::Color {
                rgba,
                width,
                height,
            },
        )
    }

    /// Registering an existing `(type, name)` again replaces it under the
    /// same id.
    fn insert(&mut self, kind: &str, name: &str, resource: Resource) -> i32 {
        let key = (kind.to_string(), name.to_string());
        let id = match self.names.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.names.insert(key, id);
                id
            }
        };
        self.entries.insert(id, resource);
        trace!(
            package = self.package.as_str(),
            kind,
            name,
            id,
            "registered resource"
        );
        id
    }

    fn entry(&self, id: i32) -> Result<&Resource, LoadError> {
        self.entries.get(&id).ok_or(LoadError::ResourceNotFound(id))
    }
}

impl ResourceContainer for MemoryResources {
    fn package_name(&self) -> &str {
        &self.package
    }

    fn identifier(&self, name: &str, kind: &str, package: &str) -> i32 {
        if package != self.package {
            return 0;
        }
        self.names
            .get(&(kind.to_string(), name.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn decode_bounds(&self, id: i32) -> Result<BoundsInfo, LoadError> {
        match self.entry(id)? {
            Resource::Raster(bytes) => probe_dimensions(bytes),
            Resource::Vector(_) | Resource::Color { .. } => Ok(BoundsInfo::default()),
        }
    }

    fn decode(
        &self,
        id: i32,
        options: Option<&DecodeOptions>,
    ) -> Result<Option<Bitmap>, LoadError> {
        match self.entry(id)? {
            Resource::Raster(bytes) => decode_bytes(bytes, options, &self.settings).map(Some),
            Resource::Vector(_) | Resource::Color { .. } => Ok(None),
        }
    }

    fn drawable(&self, id: i32) -> Result<Box<dyn Drawable>, LoadError> {
        match self.entry(id)? {
            Resource::Raster(bytes) => {
                let bitmap = decode_bytes(bytes, None, &self.settings)?;
                Ok(Box::new(BitmapDrawable::from_bitmap(&bitmap)?))
            }
            Resource::Vector(svg) => Ok(Box::new(SvgDrawable::from_data(svg)?)),
            Resource::Color {
                rgba,
                width,
                height,
            } => Ok(Box::new(
                ColorDrawable::new(*rgba).with_intrinsic_size(*width, *height),
            )),
        }
    }
}

/// Packages known to an in-memory platform.
#[derive(Debug, Clone, Default)]
pub struct MemoryPackageRegistry {
    packages: HashMap<String, Arc<MemoryResources>>,
}

impl MemoryPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a package, creating it when missing.
    ///
    /// Clones the package first if it is shared with an in-flight load.
    pub fn package_mut(&mut self, package: &str) -> &mut MemoryResources {
        let entry = self
            .packages
            .entry(package.to_string())
            .or_insert_with(|| Arc::new(MemoryResources::new(package)));
        Arc::make_mut(entry)
    }

    pub fn get(&self, package: &str) -> Option<&Arc<MemoryResources>> {
        self.packages.get(package)
    }
}

impl PackageRegistry for MemoryPackageRegistry {
    fn resources_for_package(&self, package: &str) -> Option<Arc<dyn ResourceContainer>> {
        self.packages
            .get(package)
            .map(|resources| Arc::clone(resources) as Arc<dyn ResourceContainer>)
    }
}

/// A caller context whose own package lives in a [`MemoryPackageRegistry`].
#[derive(Debug, Clone)]
pub struct MemoryContext {
    package: String,
    own: Arc<MemoryResources>,
    registry: Arc<MemoryPackageRegistry>,
}

impl MemoryContext {
    /// # Errors
    ///
    /// Returns `LoadError::PackageNotFound` if `package` is not registered.
    pub fn new(
        registry: Arc<MemoryPackageRegistry>,
        package: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let package = package.into();
        let own = registry
            .get(&package)
            .cloned()
            .ok_or_else(|| LoadError::PackageNotFound(package.clone()))?;
        Ok(Self {
            package,
            own,
            registry,
        })
    }
}

impl Context for MemoryContext {
    fn package_name(&self) -> &str {
        &self.package
    }

    fn resources(&self) -> Arc<dyn ResourceContainer> {
        Arc::clone(&self.own) as Arc<dyn ResourceContainer>
    }

    fn package_registry(&self) -> &dyn PackageRegistry {
        self.registry.as_ref()
    }
}
