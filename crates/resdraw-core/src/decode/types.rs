//! Core types for decoded pixel buffers.

use image::{DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};

/// Filter type used when a decoder shrinks an image by a sample factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Pixel layout of a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 32-bit RGBA, straight alpha.
    #[default]
    Rgba8888,
    /// 24-bit RGB, no alpha.
    Rgb888,
    /// 8-bit luminance.
    Luma8,
    /// 8-bit alpha mask.
    Alpha8,
}

impl PixelFormat {
    /// Bytes used by one pixel in this layout.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb888 => 3,
            PixelFormat::Luma8 | PixelFormat::Alpha8 => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PixelFormat::Rgba8888 => "rgba8888",
            PixelFormat::Rgb888 => "rgb888",
            PixelFormat::Luma8 => "luma8",
            PixelFormat::Alpha8 => "alpha8",
        }
    }
}

/// Where a decoded image came from.
///
/// Packaged resources are local storage, so loads report `Disk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadedFrom {
    Disk,
}

/// A tightly packed pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout.
    pub format: PixelFormat,
    /// Pixel data in row-major order.
    /// Length should be width * height * format.bytes_per_pixel().
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a new Bitmap with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.bytes_per_pixel(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Convert a decoded image into the requested pixel layout.
    pub fn from_dynamic(img: DynamicImage, format: PixelFormat) -> Self {
        let (width, height) = (img.width(), img.height());
        let pixels = match format {
            PixelFormat::Rgba8888 => img.into_rgba8().into_raw(),
            PixelFormat::Rgb888 => img.into_rgb8().into_raw(),
            PixelFormat::Luma8 => img.into_luma8().into_raw(),
            PixelFormat::Alpha8 => img
                .into_rgba8()
                .into_raw()
                .chunks_exact(4)
                .map(|px| px[3])
                .collect(),
        };
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Expand to straight-alpha RGBA.
    ///
    /// Alpha masks expand to black with the mask as alpha; opaque layouts
    /// get full alpha.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let rgba = match self.format {
            PixelFormat::Rgba8888 => self.pixels.clone(),
            PixelFormat::Rgb888 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            PixelFormat::Luma8 => self.pixels.iter().flat_map(|&l| [l, l, l, 255]).collect(),
            PixelFormat::Alpha8 => self.pixels.iter().flat_map(|&a| [0, 0, 0, a]).collect(),
        };
        RgbaImage::from_raw(self.width, self.height, rgba)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}

/// A pixel buffer handed back to the caller, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub bitmap: Bitmap,
    pub loaded_from: LoadedFrom,
}

impl DecodedImage {
    pub fn new(bitmap: Bitmap, loaded_from: LoadedFrom) -> Self {
        Self {
            bitmap,
            loaded_from,
        }
    }

    /// Tag a bitmap as read from local resource storage.
    pub fn from_disk(bitmap: Bitmap) -> Self {
        Self::new(bitmap, LoadedFrom::Disk)
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height
    }
}
