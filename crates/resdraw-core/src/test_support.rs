//! Shared fixtures and test doubles.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::decode::{subsampled_dimensions, Bitmap, DecodeOptions};
use crate::error::LoadError;
use crate::platform::{BoundsInfo, Context, PackageRegistry, ResourceContainer};
use crate::raster::{ColorDrawable, Drawable};

/// A 24x24 SVG filled with opaque red.
pub(crate) const RED_SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><rect x="0" y="0" width="24" height="24" fill="#ff0000"/></svg>"##;

/// Encode a gradient PNG of the given size.
pub(crate) fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            128,
            255,
        ])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

type Lookup = (String, String, String);

/// A container that records every capability call.
///
/// Every id behaves the same: a raster container decodes to a zeroed bitmap
/// of its configured size (subsampled by the requested factor), otherwise
/// decode yields no pixels and the drawable is an opaque blue square.
pub(crate) struct RecordingContainer {
    package: String,
    raster: Option<BoundsInfo>,
    drawable: Option<(u32, u32)>,
    names: Mutex<HashMap<(String, String), i32>>,
    lookups: Mutex<Vec<Lookup>>,
    bounds_probes: AtomicUsize,
    decodes: Mutex<Vec<Option<DecodeOptions>>>,
}

impl RecordingContainer {
    pub(crate) fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
            raster: None,
            drawable: None,
            names: Mutex::new(HashMap::new()),
            lookups: Mutex::new(Vec::new()),
            bounds_probes: AtomicUsize::new(0),
            decodes: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_raster(mut self, width: u32, height: u32) -> Self {
        self.raster = Some(BoundsInfo::new(width, height));
        self
    }

    pub(crate) fn with_drawable(mut self, width: u32, height: u32) -> Self {
        self.drawable = Some((width, height));
        self
    }

    pub(crate) fn define(&self, kind: &str, name: &str, id: i32) {
        self.names
            .lock()
            .unwrap()
            .insert((kind.to_string(), name.to_string()), id);
    }

    pub(crate) fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().unwrap().clone()
    }

    pub(crate) fn identifier_calls(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub(crate) fn bounds_probes(&self) -> usize {
        self.bounds_probes.load(Ordering::SeqCst)
    }

    pub(crate) fn decodes(&self) -> Vec<Option<DecodeOptions>> {
        self.decodes.lock().unwrap().clone()
    }
}

impl ResourceContainer for RecordingContainer {
    fn package_name(&self) -> &str {
        &self.package
    }

    fn identifier(&self, name: &str, kind: &str, package: &str) -> i32 {
        self.lookups
            .lock()
            .unwrap()
            .push((name.to_string(), kind.to_string(), package.to_string()));
        self.names
            .lock()
            .unwrap()
            .get(&(kind.to_string(), name.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn decode_bounds(&self, _id: i32) -> Result<BoundsInfo, LoadError> {
        self.bounds_probes.fetch_add(1, Ordering::SeqCst);
        Ok(self.raster.unwrap_or_default())
    }

    fn decode(
        &self,
        _id: i32,
        options: Option<&DecodeOptions>,
    ) -> Result<Option<Bitmap>, LoadError> {
        self.decodes.lock().unwrap().push(options.copied());
        let Some(bounds) = self.raster else {
            return Ok(None);
        };
        let options = options.copied().unwrap_or_default();
        let (width, height) =
            subsampled_dimensions(bounds.width, bounds.height, options.sample_size);
        let format = options.pixel_format.unwrap_or_default();
        let pixels = vec![0u8; width as usize * height as usize * format.bytes_per_pixel()];
        Ok(Some(Bitmap::new(width, height, format, pixels)))
    }

    fn drawable(&self, id: i32) -> Result<Box<dyn Drawable>, LoadError> {
        let (width, height) = self.drawable.ok_or(LoadError::ResourceNotFound(id))?;
        Ok(Box::new(
            ColorDrawable::new([0, 0, 255, 255]).with_intrinsic_size(width, height),
        ))
    }
}

/// A context over recording containers, one per package.
pub(crate) struct StubContext {
    pub(crate) own: Arc<RecordingContainer>,
    packages: HashMap<String, Arc<RecordingContainer>>,
}

impl StubContext {
    pub(crate) fn new(package: &str) -> Self {
        Self::with_own(RecordingContainer::new(package))
    }

    pub(crate) fn with_own(container: RecordingContainer) -> Self {
        let own = Arc::new(container);
        let mut packages = HashMap::new();
        packages.insert(own.package.clone(), Arc::clone(&own));
        Self { own, packages }
    }

    pub(crate) fn with_package(self, package: &str) -> Self {
        self.with_container(RecordingContainer::new(package))
    }

    pub(crate) fn with_container(mut self, container: RecordingContainer) -> Self {
        self.packages
            .insert(container.package.clone(), Arc::new(container));
        self
    }

    pub(crate) fn package(&self, package: &str) -> &RecordingContainer {
        &self.packages[package]
    }
}

impl PackageRegistry for StubContext {
    fn resources_for_package(&self, package: &str) -> Option<Arc<dyn ResourceContainer>> {
        self.packages
            .get(package)
            .map(|c| Arc::clone(c) as Arc<dyn ResourceContainer>)
    }
}

impl Context for StubContext {
    fn package_name(&self) -> &str {
        &self.own.package
    }

    fn resources(&self) -> Arc<dyn ResourceContainer> {
        Arc::clone(&self.own) as Arc<dyn ResourceContainer>
    }

    fn package_registry(&self) -> &dyn PackageRegistry {
        self
    }
}
