//! Decoding of resolved resources into pixel buffers.
//!
//! This module provides:
//! - The pixel buffer types handed back to callers
//! - The bounds-probe-then-decode protocol ([`DecodePlan`], [`DecodeOptions`])
//! - The orchestrator that ties resolution, decoding and rasterization together
//! - Raster decoding of encoded bytes with the `image` crate
//!
//! # Memory Strategy
//!
//! When a request carries a target size, the resource is first probed for its
//! native dimensions only. The real decode is then asked for a subsampled
//! result. Whether full resolution is ever held in memory depends on the
//! decoder behind the [`ResourceContainer`](crate::platform::ResourceContainer):
//! a decoder that subsamples while reading never holds it, while
//! [`decode_bytes`] decodes fully and shrinks afterwards.

mod bytes;
mod options;
mod orchestrator;
mod resize;
mod types;

pub use bytes::{decode_bytes, probe_dimensions};
pub use options::{BoundsProbe, DecodeOptions, DecodePlan};
pub use orchestrator::{decode_resource, load};
pub use resize::{effective_sample_size, subsample, subsampled_dimensions};
pub use types::{Bitmap, DecodedImage, FilterType, LoadedFrom, PixelFormat};
