//! Drawing surfaces and the save/restore discipline items rely on.
//!
//! A [`Surface`] is anything with a canvas-style transform stack. Items never
//! pair `save` and `restore` by hand: [`SaveGuard`] saves on creation and
//! restores to the saved depth when dropped, which also covers early returns,
//! errors and panics in the code that borrowed the surface.

mod pixmap;
mod stack;

use std::ops::{Deref, DerefMut};

use crate::error::DrawError;
use crate::geometry::{Affine, Point};
use crate::paint::Color;

pub use pixmap::PixmapSurface;
pub use stack::TransformStack;

/// A canvas-style drawing target with a save/restore transform stack.
pub trait Surface {
    /// Push the current state. Returns the depth to pass to [`Surface::restore_to_count`].
    fn save(&mut self) -> usize;

    /// Pop the most recently saved state.
    ///
    /// Restoring with nothing saved is a nesting bug; implementations may panic.
    fn restore(&mut self);

    /// Number of states currently saved.
    fn save_count(&self) -> usize;

    /// Pop saved states until only `count` remain.
    fn restore_to_count(&mut self, count: usize) {
        while self.save_count() > count {
            self.restore();
        }
    }

    /// Move the origin of the current frame.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate the current frame about its origin (positive = clockwise).
    fn rotate(&mut self, degrees: f32);

    /// Matrix mapping the current frame to device pixels.
    fn matrix(&self) -> Affine;

    /// Fill an axis-aligned rectangle given in the current frame.
    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), DrawError>;

    /// Stroke a straight line given in the current frame.
    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    ) -> Result<(), DrawError>;
}

/// Saves a surface on creation and restores it to that depth on drop.
pub struct SaveGuard<'a> {
    surface: &'a mut dyn Surface,
    count: usize,
}

impl<'a> SaveGuard<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        let count = surface.save();
        Self { surface, count }
    }

    /// Depth the surface returns to when the guard drops.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> Deref for SaveGuard<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for SaveGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore_to_count(self.count);
    }
}
