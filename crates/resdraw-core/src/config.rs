//! Loader and decoder settings.
//!
//! Both structs deserialize from partial input: missing fields take their
//! defaults, so callers only spell out what they change.

use serde::{Deserialize, Serialize};

use crate::decode::{FilterType, PixelFormat};

/// Settings threaded through a resource load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Pixel layout used by rasterized drawables when the request names none.
    pub default_pixel_format: PixelFormat,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_pixel_format(mut self, format: PixelFormat) -> Self {
        self.default_pixel_format = format;
        self
    }
}

/// Settings for the in-memory raster decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeSettings {
    /// Filter used when shrinking by a sample factor.
    pub filter: FilterType,
    /// Round requested sample factors down to a power of two.
    pub power_of_two_sampling: bool,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            filter: FilterType::Bilinear,
            power_of_two_sampling: true,
        }
    }
}
