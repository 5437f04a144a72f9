//! Drawables: resources that render themselves onto a [`Canvas`].

use resvg::usvg;
use tiny_skia::{ColorU8, IntSize, Pixmap, Transform};

use crate::decode::Bitmap;
use crate::error::LoadError;

use super::Canvas;

/// Size of the area a drawable renders into, anchored at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Something that can be rendered at an arbitrary size.
pub trait Drawable {
    /// Natural width, 0 when the drawable has none.
    fn intrinsic_width(&self) -> u32;

    /// Natural height, 0 when the drawable has none.
    fn intrinsic_height(&self) -> u32;

    fn set_bounds(&mut self, bounds: Bounds);

    /// Render into the current bounds using the canvas transform.
    fn draw(&self, canvas: &mut Canvas<'_>);
}

/// Scale factor mapping `from` onto `to`, 1.0 when `from` is empty.
fn fit_scale(to: u32, from: u32) -> f32 {
    if from == 0 {
        1.0
    } else {
        to as f32 / from as f32
    }
}

/// A solid color, optionally with a natural size.
#[derive(Debug, Clone)]
pub struct ColorDrawable {
    rgba: [u8; 4],
    intrinsic: Bounds,
    bounds: Bounds,
}

impl ColorDrawable {
    pub fn new(rgba: [u8; 4]) -> Self {
        Self {
            rgba,
            intrinsic: Bounds::default(),
            bounds: Bounds::default(),
        }
    }

    pub fn with_intrinsic_size(mut self, width: u32, height: u32) -> Self {
        self.intrinsic = Bounds::new(width, height);
        self
    }
}

impl Drawable for ColorDrawable {
    fn intrinsic_width(&self) -> u32 {
        self.intrinsic.width
    }

    fn intrinsic_height(&self) -> u32 {
        self.intrinsic.height
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        canvas.fill_rect(
            self.bounds.width as f32,
            self.bounds.height as f32,
            self.rgba,
        );
    }
}

/// A vector graphic rendered with resvg.
pub struct SvgDrawable {
    tree: usvg::Tree,
    bounds: Bounds,
}

impl SvgDrawable {
    /// Parse SVG source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::CorruptedResource` if the document does not parse.
    pub fn from_data(data: &[u8]) -> Result<Self, LoadError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| LoadError::CorruptedResource(format!("failed to parse SVG: {e}")))?;
        Ok(Self {
            tree,
            bounds: Bounds::default(),
        })
    }
}

impl Drawable for SvgDrawable {
    fn intrinsic_width(&self) -> u32 {
        self.tree.size().width().ceil() as u32
    }

    fn intrinsic_height(&self) -> u32 {
        self.tree.size().height().ceil() as u32
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let size = self.tree.size();
        let local = Transform::from_scale(
            self.bounds.width as f32 / size.width(),
            self.bounds.height as f32 / size.height(),
        );
        let transform = canvas.transform().pre_concat(local);
        resvg::render(&self.tree, transform, canvas.surface());
    }
}

/// A decoded bitmap drawn as an image.
pub struct BitmapDrawable {
    pixmap: Pixmap,
    bounds: Bounds,
}

impl BitmapDrawable {
    /// Wrap a bitmap, converting it to premultiplied RGBA.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::AllocationFailed` for an empty bitmap.
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Self, LoadError> {
        let alloc_failed = || LoadError::AllocationFailed {
            width: bitmap.width,
            height: bitmap.height,
        };
        let rgba = bitmap.to_rgba_image().ok_or_else(alloc_failed)?;
        let size = IntSize::from_wh(bitmap.width, bitmap.height).ok_or_else(alloc_failed)?;

        let premultiplied = rgba
            .pixels()
            .flat_map(|px| {
                let [r, g, b, a] = px.0;
                let c = ColorU8::from_rgba(r, g, b, a).premultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        let pixmap = Pixmap::from_vec(premultiplied, size).ok_or_else(alloc_failed)?;

        Ok(Self {
            pixmap,
            bounds: Bounds::default(),
        })
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_width(&self) -> u32 {
        self.pixmap.width()
    }

    fn intrinsic_height(&self) -> u32 {
        self.pixmap.height()
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let local = Transform::from_scale(
            fit_scale(self.bounds.width, self.pixmap.width()),
            fit_scale(self.bounds.height, self.pixmap.height()),
        );
        canvas.draw_pixmap(self.pixmap.as_ref(), local);
    }
}
