//! Size policy bindings.

use resdraw_core::raster::{output_size, Bounds};
use resdraw_core::request::Request;
use wasm_bindgen::prelude::*;

/// Integer downsample factor for decoding a source towards a target box.
///
/// A target dimension of 0 leaves that axis unconstrained. Always at least 1.
#[wasm_bindgen]
pub fn compute_sample_size(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
    center_inside: bool,
) -> u32 {
    resdraw_core::sample::compute_sample_size(
        source_width,
        source_height,
        target_width,
        target_height,
        center_inside,
    )
}

/// Output `[width, height]` for rasterizing a drawable of the given
/// intrinsic size.
#[wasm_bindgen]
pub fn rasterized_size(
    intrinsic_width: u32,
    intrinsic_height: u32,
    target_width: u32,
    target_height: u32,
    only_scale_down: bool,
) -> Vec<u32> {
    let mut request = Request::from_id(1).resize(target_width, target_height);
    if only_scale_down {
        request = request.only_scale_down();
    }
    let (width, height) = output_size(Bounds::new(intrinsic_width, intrinsic_height), &request);
    vec![width, height]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_sample_size() {
        assert_eq!(compute_sample_size(400, 300, 100, 100, true), 4);
        assert_eq!(compute_sample_size(400, 300, 100, 100, false), 3);
        assert_eq!(compute_sample_size(400, 300, 0, 0, false), 1);
    }

    #[test]
    fn test_rasterized_size() {
        assert_eq!(rasterized_size(24, 24, 96, 96, false), vec![96, 96]);
        assert_eq!(rasterized_size(24, 24, 96, 96, true), vec![24, 24]);
        assert_eq!(rasterized_size(24, 48, 12, 0, false), vec![12, 48]);
    }
}
