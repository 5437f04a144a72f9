//! Raster decoding of encoded image bytes with the `image` crate.

use std::io::Cursor;

use image::ImageReader;

use crate::config::DecodeSettings;
use crate::error::LoadError;
use crate::platform::BoundsInfo;

use super::resize::{effective_sample_size, subsample};
use super::{Bitmap, DecodeOptions};

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, LoadError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::CorruptedResource(e.to_string()))
}

/// Read image dimensions from the header without decoding pixels.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` if the format is not recognized.
/// Returns `LoadError::CorruptedResource` if the header is unreadable.
pub fn probe_dimensions(bytes: &[u8]) -> Result<BoundsInfo, LoadError> {
    let reader = reader(bytes)?;
    if reader.format().is_none() {
        return Err(LoadError::InvalidFormat);
    }
    let (width, height) = reader.into_dimensions()?;
    Ok(BoundsInfo::new(width, height))
}

/// Decode image bytes, applying the sample factor and pixel format from
/// `options`.
///
/// Without options the image decodes at full resolution as RGBA.
///
/// The `image` crate has no subsampling decoders, so the full image is
/// decoded first and then shrunk; peak memory is that of the source size.
///
/// # Errors
///
/// Returns `LoadError::InvalidFormat` if the format is not recognized.
/// Returns `LoadError::CorruptedResource` if the bytes are corrupted.
pub fn decode_bytes(
    bytes: &[u8],
    options: Option<&DecodeOptions>,
    settings: &DecodeSettings,
) -> Result<Bitmap, LoadError> {
    let reader = reader(bytes)?;
    if reader.format().is_none() {
        return Err(LoadError::InvalidFormat);
    }
    let img = reader.decode()?;

    let options = options.copied().unwrap_or_default();
    let sample_size = effective_sample_size(options.sample_size, settings.power_of_two_sampling);
    let img = subsample(img, sample_size, settings.filter);

    Ok(Bitmap::from_dynamic(
        img,
        options.pixel_format.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{FilterType, PixelFormat};
    use crate::test_support::encode_png;

    #[test]
    fn test_probe_dimensions() {
        let png = encode_png(120, 80);
        assert_eq!(probe_dimensions(&png).unwrap(), BoundsInfo::new(120, 80));
    }

    #[test]
    fn test_probe_unknown_format() {
        assert!(matches!(
            probe_dimensions(b"<svg xmlns='http://www.w3.org/2000/svg'/>"),
            Err(LoadError::InvalidFormat)
        ));
    }

    #[test]
    fn test_decode_full_resolution() {
        let png = encode_png(120, 80);
        let bitmap = decode_bytes(&png, None, &DecodeSettings::default()).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (120, 80));
        assert_eq!(bitmap.format, PixelFormat::Rgba8888);
        assert_eq!(bitmap.pixels.len(), 120 * 80 * 4);
    }

    #[test]
    fn test_decode_power_of_two_sampling() {
        let png = encode_png(120, 80);
        let options = DecodeOptions {
            sample_size: 3,
            pixel_format: Some(PixelFormat::Rgb888),
        };
        let bitmap = decode_bytes(&png, Some(&options), &DecodeSettings::default()).unwrap();

        // 3 snaps down to 2
        assert_eq!((bitmap.width, bitmap.height), (60, 40));
        assert_eq!(bitmap.format, PixelFormat::Rgb888);
    }

    #[test]
    fn test_decode_linear_sampling() {
        let png = encode_png(120, 80);
        let options = DecodeOptions {
            sample_size: 3,
            pixel_format: None,
        };
        let settings = DecodeSettings {
            filter: FilterType::Nearest,
            power_of_two_sampling: false,
        };
        let bitmap = decode_bytes(&png, Some(&options), &settings).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (40, 26));
    }

    #[test]
    fn test_decode_truncated() {
        let png = encode_png(16, 16);
        let result = decode_bytes(&png[..png.len() / 2], None, &DecodeSettings::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_bytes(&[], None, &DecodeSettings::default()).is_err());
    }
}
