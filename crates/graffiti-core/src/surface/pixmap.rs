//! Raster surface backed by a tiny-skia pixmap.
//!
//! Hosts use this to bake draw-optimized items into the persisted image, or
//! to render a preview without a GPU view.

use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::{Surface, TransformStack};
use crate::error::DrawError;
use crate::geometry::{Affine, Point};
use crate::paint::Color;

/// A pixmap plus the transform stack that draws into it.
pub struct PixmapSurface {
    pixmap: Pixmap,
    stack: TransformStack,
}

impl PixmapSurface {
    /// Create a transparent surface of the given size.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Surface` if the size is zero or too large.
    pub fn new(width: u32, height: u32) -> Result<Self, DrawError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| DrawError::Surface(format!("cannot allocate {}x{} pixmap", width, height)))?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Draw on top of an existing pixmap.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            stack: TransformStack::new(),
        }
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Current frame as a tiny-skia transform.
    pub fn transform(&self) -> Transform {
        let m = self.stack.matrix();
        Transform::from_row(m.a, m.b, m.c, m.d, m.e, m.f)
    }
}

impl Surface for PixmapSurface {
    fn save(&mut self) -> usize {
        self.stack.save()
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn save_count(&self) -> usize {
        self.stack.save_count()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.stack.translate(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.stack.rotate(degrees);
    }

    fn matrix(&self) -> Affine {
        self.stack.matrix()
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), DrawError> {
        let rect = Rect::from_xywh(x, y, width, height)
            .ok_or_else(|| DrawError::Surface(format!("invalid rect {}x{}", width, height)))?;
        let paint = solid_paint(color);
        let transform = self.transform();
        self.pixmap.fill_rect(rect, &paint, transform, None);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    ) -> Result<(), DrawError> {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let path = pb
            .finish()
            .ok_or_else(|| DrawError::Surface("degenerate line".to_string()))?;

        // Round caps so short strokes read as dots
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let paint = solid_paint(color);
        let transform = self.transform();
        self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        Ok(())
    }
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(surface: &PixmapSurface, x: u32, y: u32) -> u8 {
        surface.pixmap().pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(DrawError::Surface(_))
        ));
    }

    #[test]
    fn test_fill_rect_in_translated_frame() {
        let mut surface = PixmapSurface::new(20, 20).unwrap();
        surface.translate(10.0, 10.0);
        surface
            .fill_rect(-2.0, -2.0, 4.0, 4.0, Color::rgb(255, 0, 0))
            .unwrap();

        assert_eq!(alpha_at(&surface, 10, 10), 255);
        assert_eq!(alpha_at(&surface, 1, 1), 0);
    }

    #[test]
    fn test_fill_rect_follows_rotation() {
        let mut surface = PixmapSurface::new(40, 40).unwrap();
        surface.translate(20.0, 20.0);
        surface.rotate(90.0);
        // A bar along local +x ends up pointing down on screen
        surface
            .fill_rect(4.0, -1.0, 10.0, 2.0, Color::rgb(0, 0, 255))
            .unwrap();

        assert_eq!(alpha_at(&surface, 20, 29), 255);
        assert_eq!(alpha_at(&surface, 29, 20), 0);
    }

    #[test]
    fn test_invalid_rect() {
        let mut surface = PixmapSurface::new(10, 10).unwrap();
        assert!(surface
            .fill_rect(0.0, 0.0, -1.0, 5.0, Color::BLACK)
            .is_err());
    }

    #[test]
    fn test_stroke_line() {
        let mut surface = PixmapSurface::new(20, 20).unwrap();
        surface
            .stroke_line(
                Point::new(2.0, 10.0),
                Point::new(18.0, 10.0),
                4.0,
                Color::BLACK,
            )
            .unwrap();
        assert_eq!(alpha_at(&surface, 10, 10), 255);
        assert_eq!(alpha_at(&surface, 10, 2), 0);
    }
}
