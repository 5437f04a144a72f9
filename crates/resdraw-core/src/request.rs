//! Image requests.

use std::fmt;

use crate::decode::PixelFormat;
use crate::error::LoadError;
use crate::locator::Locator;

/// An image request.
///
/// Identity comes from `resource_id` when it is non-zero; the locator is
/// only consulted when `resource_id` is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Direct resource id; 0 means "resolve through the locator".
    pub resource_id: i32,
    pub locator: Option<Locator>,
    /// Target width in pixels, 0 when unconstrained.
    pub target_width: u32,
    /// Target height in pixels, 0 when unconstrained.
    pub target_height: u32,
    /// Never enlarge a rasterized drawable past its intrinsic size.
    pub only_scale_down: bool,
    /// Fit inside the target box rather than fill it.
    pub center_inside: bool,
    pub pixel_format: Option<PixelFormat>,
}

impl Request {
    pub fn from_id(resource_id: i32) -> Self {
        Self {
            resource_id,
            ..Default::default()
        }
    }

    pub fn from_locator(locator: Locator) -> Self {
        Self {
            locator: Some(locator),
            ..Default::default()
        }
    }

    /// Build a request from locator text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidLocator` if the text does not parse.
    pub fn parse(uri: &str) -> Result<Self, LoadError> {
        Locator::parse(uri).map(Self::from_locator)
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Set the target size; 0 leaves an axis unconstrained.
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    pub fn center_inside(mut self) -> Self {
        self.center_inside = true;
        self
    }

    pub fn center_crop(mut self) -> Self {
        self.center_inside = false;
        self
    }

    pub fn only_scale_down(mut self) -> Self {
        self.only_scale_down = true;
        self
    }

    pub fn with_pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = Some(format);
        self
    }

    /// True when either target dimension is set.
    pub fn has_size(&self) -> bool {
        self.target_width != 0 || self.target_height != 0
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.locator, self.resource_id) {
            (Some(locator), 0) => write!(f, "{locator}"),
            (_, id) => write!(f, "resource {id:#x}"),
        }
    }
}
