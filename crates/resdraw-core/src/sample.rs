//! Downsample factor policy.

/// Compute the integer downsample factor for decoding a `source_width` x
/// `source_height` resource towards a `target_width` x `target_height` box.
///
/// A target dimension of 0 leaves that axis unconstrained; with both at 0 no
/// downsampling happens. When both axes are constrained, `center_inside`
/// picks the larger of the two ratios (the whole image fits the box),
/// otherwise the smaller (the image fills the box and may be cropped).
///
/// The result is always at least 1 and is not rounded to a power of two;
/// interpreting it is left to the decoder.
pub fn compute_sample_size(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
    center_inside: bool,
) -> u32 {
    if target_width == 0 && target_height == 0 {
        return 1;
    }
    if source_height <= target_height && source_width <= target_width {
        return 1;
    }

    let sample_size = if target_height == 0 {
        source_width / target_width
    } else if target_width == 0 {
        source_height / target_height
    } else {
        let height_ratio = source_height / target_height;
        let width_ratio = source_width / target_width;
        if center_inside {
            height_ratio.max(width_ratio)
        } else {
            height_ratio.min(width_ratio)
        }
    };

    sample_size.max(1)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
