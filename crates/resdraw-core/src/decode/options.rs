//! The bounds-probe-then-decode protocol.
//!
//! A load moves through explicit stages, each producing a fresh value:
//!
//! ```text
//! Request ─plan─▶ DecodePlan ─probe─▶ BoundsProbe::finish ─▶ DecodeOptions
//! ```
//!
//! Requests without a target size skip the probe. Requests with neither a
//! target size nor a pixel format decode with no options at all.

use crate::platform::BoundsInfo;
use crate::request::Request;
use crate::sample::compute_sample_size;

use super::PixelFormat;

/// Options for the real (pixel-producing) decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Integer downsample factor, at least 1.
    pub sample_size: u32,
    /// Requested pixel layout; `None` lets the decoder pick.
    pub pixel_format: Option<PixelFormat>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            sample_size: 1,
            pixel_format: None,
        }
    }
}

/// A pending bounds-only probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsProbe {
    pixel_format: Option<PixelFormat>,
}

impl BoundsProbe {
    /// Turn probed bounds into options for the real decode.
    pub fn finish(self, bounds: BoundsInfo, request: &Request) -> DecodeOptions {
        let sample_size = compute_sample_size(
            bounds.width,
            bounds.height,
            request.target_width,
            request.target_height,
            request.center_inside,
        );
        DecodeOptions {
            sample_size,
            pixel_format: self.pixel_format,
        }
    }
}

/// What the decoder needs to be told for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePlan {
    /// Full resolution, decoder's default layout.
    Default,
    /// Full resolution with options (a pixel format).
    Configured(DecodeOptions),
    /// A target size was requested: probe bounds first.
    ProbeBounds(BoundsProbe),
}

impl DecodePlan {
    pub fn for_request(request: &Request) -> Self {
        if request.has_size() {
            DecodePlan::ProbeBounds(BoundsProbe {
                pixel_format: request.pixel_format,
            })
        } else if let Some(format) = request.pixel_format {
            DecodePlan::Configured(DecodeOptions {
                sample_size: 1,
                pixel_format: Some(format),
            })
        } else {
            DecodePlan::Default
        }
    }
}
