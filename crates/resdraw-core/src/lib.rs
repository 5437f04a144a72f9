//! Resdraw Core - packaged resource loading
//!
//! This crate turns a request for a packaged resource into a pixel buffer:
//! locator parsing and scheme handling, resolution of a request to a
//! `(container, id)` pair, downsampling during decode, and rasterization of
//! vector or procedural resources that have no raster encoding.
//!
//! Platform access goes through the traits in [`platform`]; [`memory`]
//! provides an implementation backed by in-memory PNG, JPEG and SVG data.

pub mod config;
pub mod decode;
pub mod error;
pub mod handler;
pub mod locator;
pub mod memory;
pub mod platform;
pub mod raster;
pub mod request;
pub mod resolve;
pub mod sample;

#[cfg(test)]
mod test_support;

pub use config::{DecodeSettings, LoaderConfig};
pub use decode::{load, Bitmap, DecodedImage, LoadedFrom, PixelFormat};
pub use error::LoadError;
pub use handler::{HandlerRegistry, RequestHandler, ResourceRequestHandler};
pub use locator::{
    can_handle, normalize_scheme, uri_from_resource, Locator, SCHEME_ALT_ANDROID_RESOURCE,
    SCHEME_ANDROID_RESOURCE,
};
pub use memory::{MemoryContext, MemoryPackageRegistry, MemoryResources};
pub use platform::{BoundsInfo, Context, PackageRegistry, ResourceContainer};
pub use request::Request;
pub use sample::compute_sample_size;
