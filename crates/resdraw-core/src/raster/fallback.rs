//! Rasterization of resources that do not decode to pixels directly.

use tiny_skia::Pixmap;
use tracing::{debug, warn};

use crate::decode::{Bitmap, DecodedImage, PixelFormat};
use crate::error::LoadError;
use crate::platform::ResourceContainer;
use crate::request::Request;

use super::{Bounds, Canvas};

/// Output size for a drawable of size `intrinsic` under `request`.
///
/// Each axis takes the target size when one is set, unless
/// `only_scale_down` is on and the target is not smaller than the intrinsic
/// size; otherwise the intrinsic size is kept.
pub fn output_size(intrinsic: Bounds, request: &Request) -> (u32, u32) {
    let width = axis_size(request.target_width, intrinsic.width, request.only_scale_down);
    let height = axis_size(
        request.target_height,
        intrinsic.height,
        request.only_scale_down,
    );
    (width, height)
}

fn axis_size(target: u32, intrinsic: u32, only_scale_down: bool) -> u32 {
    if target > 0 && (!only_scale_down || target < intrinsic) {
        target
    } else {
        intrinsic
    }
}

/// Scale on one axis; axes without an intrinsic size are not scaled.
fn axis_scale(output: u32, intrinsic: u32) -> f32 {
    if intrinsic == 0 {
        1.0
    } else {
        output as f32 / intrinsic as f32
    }
}

/// Rasterize the drawable form of resource `id` into a new buffer.
///
/// Returns `Ok(None)` when the computed output size is empty.
///
/// # Errors
///
/// Propagates the container's drawable lookup failure, and returns
/// `LoadError::AllocationFailed` if the buffer cannot be allocated.
pub fn rasterize(
    container: &dyn ResourceContainer,
    id: i32,
    request: &Request,
    default_format: PixelFormat,
) -> Result<Option<DecodedImage>, LoadError> {
    let mut drawable = container.drawable(id)?;
    let intrinsic = Bounds::new(drawable.intrinsic_width(), drawable.intrinsic_height());
    let (width, height) = output_size(intrinsic, request);

    if width == 0 || height == 0 {
        warn!(id, width, height, "drawable rasterizes to an empty image");
        return Ok(None);
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or(LoadError::AllocationFailed { width, height })?;
    {
        let mut canvas = Canvas::new(&mut pixmap);
        // Axes with no intrinsic size draw straight into the output.
        let draw_bounds = Bounds::new(
            if intrinsic.width == 0 { width } else { intrinsic.width },
            if intrinsic.height == 0 { height } else { intrinsic.height },
        );
        drawable.set_bounds(draw_bounds);
        if width != intrinsic.width || height != intrinsic.height {
            canvas.scale(
                axis_scale(width, intrinsic.width),
                axis_scale(height, intrinsic.height),
            );
        }
        drawable.draw(&mut canvas);
    }

    let format = request.pixel_format.unwrap_or(default_format);
    debug!(
        id,
        intrinsic_width = intrinsic.width,
        intrinsic_height = intrinsic.height,
        width,
        height,
        format = format.as_str(),
        "rasterized drawable"
    );
    let bitmap = surface_to_bitmap(&pixmap, format)?;
    Ok(Some(DecodedImage::from_disk(bitmap)))
}

/// Convert the premultiplied drawing surface into a bitmap of `format`.
fn surface_to_bitmap(pixmap: &Pixmap, format: PixelFormat) -> Result<Bitmap, LoadError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or(LoadError::AllocationFailed { width, height })?;
    Ok(Bitmap::from_dynamic(
        image::DynamicImage::ImageRgba8(image),
        format,
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: only-scale-down never produces a larger axis than the
        /// intrinsic size.
        #[test]
        fn prop_only_scale_down_never_enlarges(
            iw in 0u32..2_000,
            ih in 0u32..2_000,
            tw in 0u32..4_000,
            th in 0u32..4_000,
        ) {
            let request = Request::from_id(1).resize(tw, th).only_scale_down();
            let (w, h) = output_size(Bounds::new(iw, ih), &request);
            prop_assert!(w <= iw);
            prop_assert!(h <= ih);
        }

        /// Property: without only-scale-down a set target always wins.
        #[test]
        fn prop_target_wins(
            iw in 0u32..2_000,
            ih in 0u32..2_000,
            tw in 1u32..4_000,
            th in 1u32..4_000,
        ) {
            let request = Request::from_id(1).resize(tw, th);
            prop_assert_eq!(output_size(Bounds::new(iw, ih), &request), (tw, th));
        }
    }
}
