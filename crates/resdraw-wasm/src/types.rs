//! WASM-compatible wrapper types for pixel buffers.

use resdraw_core::decode::{Bitmap, DecodedImage, LoadedFrom};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

/// A loaded pixel buffer for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and
/// `to_image_data()` copy it into JavaScript memory.
#[wasm_bindgen]
pub struct JsBitmap {
    bitmap: Bitmap,
    loaded_from: LoadedFrom,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.bitmap.height
    }

    /// Pixel layout name: "rgba8888", "rgb888", "luma8" or "alpha8"
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.bitmap.format.as_str().to_string()
    }

    /// Where the pixels came from ("disk" for packaged resources)
    #[wasm_bindgen(getter)]
    pub fn loaded_from(&self) -> String {
        match self.loaded_from {
            LoadedFrom::Disk => "disk",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bitmap.byte_size()
    }

    /// Returns the pixel data in its native layout as a Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.bitmap.pixels.clone()
    }

    /// Convert to an `ImageData`, expanding to RGBA first if needed.
    ///
    /// # Errors
    /// Returns an error if the browser rejects the buffer.
    pub fn to_image_data(&self) -> Result<web_sys::ImageData, JsValue> {
        let rgba = self
            .bitmap
            .to_rgba_image()
            .ok_or_else(|| JsValue::from_str("Pixel buffer does not match its dimensions"))?;
        web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(rgba.as_raw().as_slice()),
            self.bitmap.width,
            self.bitmap.height,
        )
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsBitmap {
    pub(crate) fn from_decoded(image: DecodedImage) -> Self {
        Self {
            bitmap: image.bitmap,
            loaded_from: image.loaded_from,
        }
    }
}
