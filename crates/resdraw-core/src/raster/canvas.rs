//! Drawing surface bound to a pixel buffer.

use tiny_skia::{Paint, Pixmap, PixmapMut, PixmapPaint, PixmapRef, Rect, Transform};

/// A drawing surface over a borrowed pixmap.
///
/// The surface holds the pixmap for as long as the canvas lives; dropping the
/// canvas detaches it and hands the buffer back to its owner.
pub struct Canvas<'a> {
    surface: PixmapMut<'a>,
    transform: Transform,
}

impl<'a> Canvas<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            surface: pixmap.as_mut(),
            transform: Transform::identity(),
        }
    }

    /// Scale everything drawn from now on.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
    }

    /// The current drawing transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Direct access for renderers that draw onto a `PixmapMut` themselves.
    pub fn surface(&mut self) -> &mut PixmapMut<'a> {
        &mut self.surface
    }

    /// Fill a rectangle in drawable coordinates with a straight-alpha color.
    pub fn fill_rect(&mut self, width: f32, height: f32, rgba: [u8; 4]) {
        let Some(rect) = Rect::from_xywh(0.0, 0.0, width, height) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
        paint.anti_alias = false;
        self.surface.fill_rect(rect, &paint, self.transform, None);
    }

    /// Draw a pixmap at the origin with an extra transform applied after the
    /// canvas transform.
    pub fn draw_pixmap(&mut self, pixmap: PixmapRef<'_>, local: Transform) {
        let transform = self.transform.pre_concat(local);
        self.surface
            .draw_pixmap(0, 0, pixmap, &PixmapPaint::default(), transform, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_starts_untransformed() {
        let mut pixmap = Pixmap::new(8, 4).unwrap();
        let canvas = Canvas::new(&mut pixmap);
        assert!(canvas.transform().is_identity());
    }

    #[test]
    fn test_scale_accumulates() {
        let mut pixmap = Pixmap::new(8, 8).unwrap();
        let mut canvas = Canvas::new(&mut pixmap);
        canvas.scale(2.0, 3.0);
        canvas.scale(2.0, 1.0);

        let t = canvas.transform();
        assert_eq!((t.sx, t.sy), (4.0, 3.0));
    }

    #[test]
    fn test_fill_rect_under_scale() {
        let mut pixmap = Pixmap::new(4, 4).unwrap();
        {
            let mut canvas = Canvas::new(&mut pixmap);
            canvas.scale(2.0, 2.0);
            canvas.fill_rect(1.0, 1.0, [255, 0, 0, 255]);
        }

        let inside = pixmap.pixel(1, 1).unwrap();
        assert_eq!((inside.red(), inside.alpha()), (255, 255));
        let outside = pixmap.pixel(3, 3).unwrap();
        assert_eq!(outside.alpha(), 0);
    }
}
