//! Resdraw WASM - WebAssembly bindings for resdraw
//!
//! This crate exposes resdraw-core resource loading to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for decoded pixel buffers
//! - `locator` - Resource locator helpers (scheme checks, normalization)
//! - `policy` - Sample-size and rasterized-size calculations
//! - `loader` - An in-memory resource loader
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsResourceLoader } from '@resdraw/wasm';
//!
//! await init();
//!
//! const loader = new JsResourceLoader('com.example');
//! loader.add_svg('com.example', 'drawable', 'icon', svgBytes);
//! const image = loader.load('android.resource://com.example/drawable/icon', {
//!   targetWidth: 96,
//!   targetHeight: 96,
//! });
//! ctx.putImageData(image.to_image_data(), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod loader;
mod locator;
mod policy;
mod types;

pub use loader::JsResourceLoader;
pub use locator::{can_handle_uri, normalize_uri, uri_from_resource};
pub use policy::{compute_sample_size, rasterized_size};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
