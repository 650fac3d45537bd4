//! Matrix-only surface.

use super::Surface;
use crate::error::DrawError;
use crate::geometry::{Affine, Point};
use crate::paint::Color;

/// A surface that only tracks its transform stack.
///
/// Useful for hit testing (map a local point through an item's frame without
/// drawing) and as the transform half of raster surfaces. Drawing calls are
/// accepted and dropped. Counts every save, restore and draw call.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
    saves: usize,
    restores: usize,
    draw_calls: usize,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `save` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Total number of states popped so far.
    pub fn restores(&self) -> usize {
        self.restores
    }

    /// Total number of drawing calls received.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Map a point in the current frame to device pixels.
    pub fn map_point(&self, p: Point) -> Point {
        self.current.map_point(p)
    }
}

impl Surface for TransformStack {
    fn save(&mut self) -> usize {
        let count = self.saved.len();
        self.saved.push(self.current);
        self.saves += 1;
        count
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(m) => {
                self.current = m;
                self.restores += 1;
            }
            None => panic!("surface restore without a matching save"),
        }
    }

    fn save_count(&self) -> usize {
        self.saved.len()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.translate(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.current = self.current.rotate(degrees);
    }

    fn matrix(&self) -> Affine {
        self.current
    }

    fn fill_rect(
        &mut self,
        _x: f32,
        _y: f32,
        _width: f32,
        _height: f32,
        _color: Color,
    ) -> Result<(), DrawError> {
        self.draw_calls += 1;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        _from: Point,
        _to: Point,
        _width: f32,
        _color: Color,
    ) -> Result<(), DrawError> {
        self.draw_calls += 1;
        Ok(())
    }
}
