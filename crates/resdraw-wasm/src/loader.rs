//! In-memory resource loader bindings.
//!
//! Resources are registered from JavaScript as encoded bytes or SVG text and
//! loaded back by URI or numeric id, with optional sizing in a plain options
//! object:
//!
//! ```typescript
//! const image = loader.load(uri, {
//!   targetWidth: 100,
//!   targetHeight: 100,
//!   centerInside: true,
//!   onlyScaleDown: false,
//!   pixelFormat: 'rgb888',
//! });
//! ```

use std::sync::Arc;

use resdraw_core::config::{DecodeSettings, LoaderConfig};
use resdraw_core::decode::{load, FilterType, PixelFormat};
use resdraw_core::error::LoadError;
use resdraw_core::memory::{MemoryContext, MemoryPackageRegistry};
use resdraw_core::request::Request;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// Sizing options accepted by `load` and `load_id`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsLoadOptions {
    target_width: u32,
    target_height: u32,
    center_inside: bool,
    only_scale_down: bool,
    pixel_format: Option<PixelFormat>,
}

impl JsLoadOptions {
    fn apply(&self, mut request: Request) -> Request {
        request = request.resize(self.target_width, self.target_height);
        if self.center_inside {
            request = request.center_inside();
        }
        if self.only_scale_down {
            request = request.only_scale_down();
        }
        if let Some(format) = self.pixel_format {
            request = request.with_pixel_format(format);
        }
        request
    }
}

fn parse_options(options: JsValue) -> Result<JsLoadOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(JsLoadOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid load options: {}", e)))
}

fn to_js_error(error: LoadError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// A resource loader over packages held in WASM memory.
#[wasm_bindgen]
pub struct JsResourceLoader {
    package: String,
    registry: Arc<MemoryPackageRegistry>,
    config: LoaderConfig,
}

#[wasm_bindgen]
impl JsResourceLoader {
    /// Create a loader whose own package is `package`.
    #[wasm_bindgen(constructor)]
    pub fn new(package: &str) -> JsResourceLoader {
        let mut registry = MemoryPackageRegistry::new();
        registry.package_mut(package);
        JsResourceLoader {
            package: package.to_string(),
            registry: Arc::new(registry),
            config: LoaderConfig::default(),
        }
    }

    /// Set the pixel format used for rasterized resources when a load names
    /// none.
    ///
    /// # Errors
    /// Returns error for an unknown format name.
    pub fn set_default_pixel_format(&mut self, format: &str) -> Result<(), JsValue> {
        self.config.default_pixel_format = parse_pixel_format(format)?;
        Ok(())
    }

    /// Configure raster decoding for `package`.
    ///
    /// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3. Any other value
    /// defaults to Bilinear.
    pub fn set_decode_settings(&mut self, package: &str, filter: u8, power_of_two: bool) {
        let settings = DecodeSettings {
            filter: filter_from_u8(filter),
            power_of_two_sampling: power_of_two,
        };
        self.package_mut(package).set_settings(settings);
    }

    /// Register encoded PNG or JPEG bytes. Returns the resource id.
    pub fn add_raster(&mut self, package: &str, kind: &str, name: &str, bytes: &[u8]) -> i32 {
        self.package_mut(package).add_raster(kind, name, bytes)
    }

    /// Register an SVG document. Returns the resource id.
    ///
    /// # Errors
    /// Returns error if the document does not parse.
    pub fn add_svg(
        &mut self,
        package: &str,
        kind: &str,
        name: &str,
        svg: &[u8],
    ) -> Result<i32, JsValue> {
        self.package_mut(package)
            .add_svg(kind, name, svg)
            .map_err(to_js_error)
    }

    /// Register a solid color as `[r, g, b, a]` with a natural size.
    ///
    /// # Errors
    /// Returns error unless `rgba` has exactly four components.
    pub fn add_color(
        &mut self,
        package: &str,
        kind: &str,
        name: &str,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<i32, JsValue> {
        let rgba: [u8; 4] = rgba
            .try_into()
            .map_err(|_| JsValue::from_str("Color must have 4 components"))?;
        Ok(self
            .package_mut(package)
            .add_color(kind, name, rgba, width, height))
    }

    /// Load a resource by URI.
    ///
    /// Returns `undefined` when the resource rasterizes to an empty image.
    ///
    /// # Errors
    /// Returns error if the URI or options are invalid, or the load fails.
    pub fn load(&self, uri: &str, options: JsValue) -> Result<Option<JsBitmap>, JsValue> {
        let request = Request::parse(uri).map_err(to_js_error)?;
        self.load_request(request, options)
    }

    /// Load a resource of the loader's own package by id.
    ///
    /// # Errors
    /// Returns error if the options are invalid or the load fails.
    pub fn load_id(&self, resource_id: i32, options: JsValue) -> Result<Option<JsBitmap>, JsValue> {
        self.load_request(Request::from_id(resource_id), options)
    }
}

impl JsResourceLoader {
    fn package_mut(&mut self, package: &str) -> &mut resdraw_core::memory::MemoryResources {
        Arc::make_mut(&mut self.registry).package_mut(package)
    }

    fn load_request(
        &self,
        request: Request,
        options: JsValue,
    ) -> Result<Option<JsBitmap>, JsValue> {
        let request = parse_options(options)?.apply(request);
        self.load_core(&request).map_err(to_js_error)
    }

    fn load_core(&self, request: &Request) -> Result<Option<JsBitmap>, LoadError> {
        let context = MemoryContext::new(Arc::clone(&self.registry), self.package.clone())?;
        Ok(load(&context, request, &self.config)?.map(JsBitmap::from_decoded))
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

fn parse_pixel_format(name: &str) -> Result<PixelFormat, JsValue> {
    match name {
        "rgba8888" => Ok(PixelFormat::Rgba8888),
        "rgb888" => Ok(PixelFormat::Rgb888),
        "luma8" => Ok(PixelFormat::Luma8),
        "alpha8" => Ok(PixelFormat::Alpha8),
        other => Err(JsValue::from_str(&format!("Unknown pixel format: {}", other))),
    }
}
