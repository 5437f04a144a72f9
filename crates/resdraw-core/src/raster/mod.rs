//! Rasterization fallback for resources that are not raster-decodable.
//!
//! A procedural or vector resource is drawn into a freshly allocated buffer:
//!
//! 1. Look up the drawable and read its intrinsic size
//! 2. Pick the output size from the target size and `only_scale_down`
//! 3. Bind a [`Canvas`] to a new buffer, scale, draw, and release it
//!
//! Drawing always happens on a premultiplied RGBA surface; the result is
//! converted to the requested [`PixelFormat`](crate::decode::PixelFormat)
//! afterwards.

mod canvas;
mod drawable;
mod fallback;

pub use canvas::Canvas;
pub use drawable::{BitmapDrawable, Bounds, ColorDrawable, Drawable, SvgDrawable};
pub use fallback::{output_size, rasterize};
