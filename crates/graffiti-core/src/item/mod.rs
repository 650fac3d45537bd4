//! Annotation items and their draw contract.
//!
//! Concrete item types (paths, text, shapes) embed an [`ItemBase`] and
//! implement [`GraffitiItem::do_draw`]. The provided [`GraffitiItem::draw`]
//! moves the surface origin to the item's displayed location and rotates it
//! by the image's rotation since binding plus the item's own rotation, so
//! `do_draw` always renders in the item's local, upright frame.
//!
//! # Draw Order
//!
//! For each frame a host typically calls, per item:
//! 1. `draw_before` - view-only underlay, never baked into the image
//! 2. `draw` - the item itself
//! 3. `draw_after` - view-only overlay such as selection handles
//!
//! `draw_before` and `draw_after` get the host's surface as-is; no item frame
//! is in effect while they run.

mod base;

use std::rc::Rc;

use crate::error::{DrawError, ItemError};
use crate::frame::GraffitiHost;
use crate::geometry::Point;
use crate::surface::{SaveGuard, Surface};

pub use base::ItemBase;

/// An annotation item placed on a rotatable image.
pub trait GraffitiItem {
    fn base(&self) -> &ItemBase;

    fn base_mut(&mut self) -> &mut ItemBase;

    /// Render the item body in its local frame.
    ///
    /// The origin is the item's anchor and the axes are already rotated; the
    /// body never deals with image rotation. Unset appearance attributes are
    /// passed through as-is and it is up to the body to reject them.
    fn do_draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError>;

    /// View-only content drawn underneath the image.
    fn draw_before(&self, _surface: &mut dyn Surface) -> Result<(), DrawError> {
        Ok(())
    }

    /// View-only content drawn on top of the image.
    fn draw_after(&self, _surface: &mut dyn Surface) -> Result<(), DrawError> {
        Ok(())
    }

    /// Called once by the host when the item is inserted.
    fn on_add(&mut self) {}

    /// Called once by the host when the item is evicted.
    fn on_remove(&mut self) {}

    /// Draw the item: save, enter the item frame, delegate to
    /// [`GraffitiItem::do_draw`], restore.
    ///
    /// The surface is restored to its entry depth on every path, including
    /// errors or panics from `do_draw` and saves it left unbalanced. Errors
    /// from `do_draw` are returned unchanged.
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let mut frame = SaveGuard::new(surface);
        let base = self.base();
        let location = base.location()?;
        let rotation = base.canvas_rotation()?;
        log::trace!("draw item at {:?}, rotated {}", location, rotation);

        frame.translate(location.x, location.y);
        frame.rotate(rotation);
        self.do_draw(&mut *frame)
    }

    /// See [`ItemBase::bind`].
    fn bind(&mut self, host: Option<Rc<dyn GraffitiHost>>) -> Result<(), ItemError> {
        self.base_mut().bind(host)
    }

    /// See [`ItemBase::location`].
    fn location(&self) -> Result<Point, ItemError> {
        self.base().location()
    }

    /// See [`ItemBase::set_location`].
    fn set_location(&mut self, location: Point) -> Result<(), ItemError> {
        self.base_mut().set_location(location)
    }
}
