//! Subsampling applied by the decoder once a sample factor is known.
//!
//! The sample factor comes from [`crate::sample::compute_sample_size`]; how
//! the decoder interprets it (exact stride or power-of-two snapping) is
//! decided here, not by the calculator.

use image::DynamicImage;

use super::FilterType;

/// Interpret a requested sample factor.
///
/// With `power_of_two` set the factor is rounded down to the nearest power
/// of two, the way platform decoders treat it. A factor of 0 is treated as 1.
pub fn effective_sample_size(requested: u32, power_of_two: bool) -> u32 {
    let requested = requested.max(1);
    if power_of_two {
        1 << (u32::BITS - 1 - requested.leading_zeros())
    } else {
        requested
    }
}

/// Dimensions of an image shrunk by `sample_size` on both axes.
///
/// Never returns a zero dimension for a non-empty source.
pub fn subsampled_dimensions(width: u32, height: u32, sample_size: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let sample_size = sample_size.max(1);
    ((width / sample_size).max(1), (height / sample_size).max(1))
}

/// Shrink an image by an integer sample factor.
///
/// A factor of 1 (or less) returns the image unchanged.
pub fn subsample(image: DynamicImage, sample_size: u32, filter: FilterType) -> DynamicImage {
    if sample_size <= 1 {
        return image;
    }

    let (width, height) = subsampled_dimensions(image.width(), image.height(), sample_size);
    if width == image.width() && height == image.height() {
        return image;
    }

    image.resize_exact(width, height, filter.to_image_filter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        // Simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DynamicImage::ImageRgb8(image::RgbImage::from_raw(width, height, pixels).unwrap())
    }

    #[test]
    fn test_effective_sample_size_power_of_two() {
        assert_eq!(effective_sample_size(1, true), 1);
        assert_eq!(effective_sample_size(2, true), 2);
        assert_eq!(effective_sample_size(3, true), 2);
        assert_eq!(effective_sample_size(7, true), 4);
        assert_eq!(effective_sample_size(8, true), 8);
        assert_eq!(effective_sample_size(u32::MAX, true), 1 << 31);
    }

    #[test]
    fn test_effective_sample_size_linear() {
        assert_eq!(effective_sample_size(3, false), 3);
        assert_eq!(effective_sample_size(7, false), 7);
    }

    #[test]
    fn test_effective_sample_size_zero() {
        assert_eq!(effective_sample_size(0, true), 1);
        assert_eq!(effective_sample_size(0, false), 1);
    }

    #[test]
    fn test_subsampled_dimensions() {
        assert_eq!(subsampled_dimensions(100, 50, 2), (50, 25));
        assert_eq!(subsampled_dimensions(100, 50, 3), (33, 16));
        assert_eq!(subsampled_dimensions(4, 2, 8), (1, 1));
        assert_eq!(subsampled_dimensions(0, 0, 2), (0, 0));
    }

    #[test]
    fn test_subsample_basic() {
        let img = create_test_image(100, 50);
        let out = subsample(img, 2, FilterType::Bilinear);

        assert_eq!(out.width(), 50);
        assert_eq!(out.height(), 25);
    }

    #[test]
    fn test_subsample_identity() {
        let img = create_test_image(100, 50);
        let out = subsample(img, 1, FilterType::Bilinear);

        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 50);
    }

    #[test]
    fn test_all_filter_types() {
        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let out = subsample(create_test_image(100, 50), 4, filter);
            assert_eq!(out.width(), 25);
            assert_eq!(out.height(), 12);
        }
    }
}
