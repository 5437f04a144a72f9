//! Resolve, probe, decode, and fall back to rasterization.

use tracing::{debug, trace};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::platform::Context;
use crate::raster::rasterize;
use crate::request::Request;
use crate::resolve::{resolve, ResourceReference};

use super::{DecodePlan, DecodedImage};

/// Load `request` into a pixel buffer.
///
/// Returns `Ok(None)` when the resource is a drawable that rasterizes to an
/// empty image.
///
/// # Errors
///
/// Resolution failures (see [`crate::resolve`]) and capability failures from
/// the resource container are returned unchanged.
pub fn load(
    context: &dyn Context,
    request: &Request,
    config: &LoaderConfig,
) -> Result<Option<DecodedImage>, LoadError> {
    let reference = resolve(context, request)?;
    decode_resource(&reference, request, config)
}

/// Decode an already resolved resource.
///
/// When a target size is set, the container is first asked for bounds only
/// and the real decode is subsampled to the computed factor. If the real
/// decode produces no pixels, the resource is rasterized instead.
pub fn decode_resource(
    reference: &ResourceReference,
    request: &Request,
    config: &LoaderConfig,
) -> Result<Option<DecodedImage>, LoadError> {
    let container = reference.container.as_ref();
    let id = reference.id;

    let options = match DecodePlan::for_request(request) {
        DecodePlan::Default => None,
        DecodePlan::Configured(options) => Some(options),
        DecodePlan::ProbeBounds(probe) => {
            let bounds = container.decode_bounds(id)?;
            let options = probe.finish(bounds, request);
            debug!(
                id,
                source_width = bounds.width,
                source_height = bounds.height,
                target_width = request.target_width,
                target_height = request.target_height,
                sample_size = options.sample_size,
                "probed bounds"
            );
            Some(options)
        }
    };

    match container.decode(id, options.as_ref())? {
        Some(bitmap) => {
            trace!(id, width = bitmap.width, height = bitmap.height, "decoded bitmap");
            Ok(Some(DecodedImage::from_disk(bitmap)))
        }
        None => {
            debug!(id, "resource is not raster-decodable, rasterizing");
            rasterize(container, id, request, config.default_pixel_format)
        }
    }
}
