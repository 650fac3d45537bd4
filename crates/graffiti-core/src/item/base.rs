//! State shared by every item: binding, anchor, rotation, appearance, flags.

use std::fmt;
use std::rc::Rc;

use crate::error::ItemError;
use crate::frame::GraffitiHost;
use crate::geometry::{Affine, Point};
use crate::paint::{Color, PaintAttrs, Pen, Shape};
use crate::transform::{canonical_pivot, to_canonical, to_display};

/// Binding and anchor state embedded in every concrete item.
///
/// The anchor is stored in canonical space. Display positions are computed
/// on every call from the host's current rotation, so nothing here needs
/// updating when the image is rotated.
pub struct ItemBase {
    host: Option<Rc<dyn GraffitiHost>>,
    /// Host rotation captured at bind time
    orientation: f32,
    /// Image center in canonical space, captured at bind time
    pivot: Point,
    /// Anchor in canonical space
    origin: Point,
    item_rotation: f32,
    attrs: PaintAttrs,
    draw_optimize: bool,
    clip_outside: bool,
}

impl Default for ItemBase {
    fn default() -> Self {
        Self {
            host: None,
            orientation: 0.0,
            pivot: Point::default(),
            origin: Point::default(),
            item_rotation: 0.0,
            attrs: PaintAttrs::default(),
            draw_optimize: false,
            clip_outside: true,
        }
    }
}

impl fmt::Debug for ItemBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemBase")
            .field("bound", &self.host.is_some())
            .field("orientation", &self.orientation)
            .field("pivot", &self.pivot)
            .field("origin", &self.origin)
            .field("item_rotation", &self.item_rotation)
            .field("attrs", &self.attrs)
            .field("draw_optimize", &self.draw_optimize)
            .field("clip_outside", &self.clip_outside)
            .finish()
    }
}

impl ItemBase {
    /// Create an unbound item with unset appearance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unbound item seeded from an appearance bundle.
    pub fn with_attrs(attrs: &PaintAttrs) -> Self {
        Self {
            attrs: *attrs,
            ..Self::default()
        }
    }

    /// Create an item bound to `host`, optionally seeded from `attrs`.
    pub fn attached(host: Rc<dyn GraffitiHost>, attrs: Option<&PaintAttrs>) -> Self {
        let mut base = attrs.map(Self::with_attrs).unwrap_or_default();
        base.capture(host);
        base
    }

    /// Bind the item to a host, or detach it with `None`.
    ///
    /// Binding captures the host's rotation as the item's orientation and
    /// the canonical image center as its pivot. Neither changes afterwards,
    /// even if the host later swaps or rotates its bitmap.
    ///
    /// # Errors
    ///
    /// Returns `ItemError::AlreadyBound` when binding a host to an item that
    /// already has one. Items belong to a single host; detach first.
    pub fn bind(&mut self, host: Option<Rc<dyn GraffitiHost>>) -> Result<(), ItemError> {
        match host {
            None => {
                if self.host.take().is_some() {
                    log::debug!("item detached from host");
                }
                Ok(())
            }
            Some(_) if self.host.is_some() => {
                log::warn!("refusing to bind an item that already has a host");
                Err(ItemError::AlreadyBound)
            }
            Some(host) => {
                self.capture(host);
                Ok(())
            }
        }
    }

    fn capture(&mut self, host: Rc<dyn GraffitiHost>) {
        let rotation = host.rotation();
        let (width, height) = host.bitmap_size();
        self.orientation = rotation;
        self.pivot = canonical_pivot(width, height, rotation);
        log::debug!(
            "item bound at rotation {} (bitmap {}x{}, pivot {:?})",
            rotation,
            width,
            height,
            self.pivot
        );
        self.host = Some(host);
    }

    /// The host this item is bound to, if any.
    pub fn host(&self) -> Option<&Rc<dyn GraffitiHost>> {
        self.host.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.host.is_some()
    }

    /// Host rotation captured at bind time.
    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    /// Canonical image center captured at bind time.
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Anchor in canonical space.
    pub fn canonical_location(&self) -> Point {
        self.origin
    }

    fn current_rotation(&self) -> Result<f32, ItemError> {
        self.host
            .as_ref()
            .map(|host| host.rotation())
            .ok_or(ItemError::Unbound)
    }

    /// Where the anchor is displayed at the host's current rotation.
    pub fn location(&self) -> Result<Point, ItemError> {
        let current = self.current_rotation()?;
        Ok(to_display(self.origin, self.orientation, current, self.pivot))
    }

    /// Move the anchor to a point given in display space.
    ///
    /// The point is mapped back to canonical space before it is stored; the
    /// display value itself is never kept.
    pub fn set_location(&mut self, location: Point) -> Result<(), ItemError> {
        let current = self.current_rotation()?;
        self.origin = to_canonical(location, self.orientation, current, self.pivot);
        Ok(())
    }

    /// Extra rotation of the item's own content, in degrees.
    pub fn item_rotation(&self) -> f32 {
        self.item_rotation
    }

    pub fn set_item_rotation(&mut self, degrees: f32) {
        self.item_rotation = degrees;
    }

    /// Rotation the draw frame applies: image rotation since binding plus the
    /// item's own rotation.
    pub fn canvas_rotation(&self) -> Result<f32, ItemError> {
        let current = self.current_rotation()?;
        Ok(current - self.orientation + self.item_rotation)
    }

    /// The local frame `draw` installs before delegating to the item body.
    pub fn local_transform(&self) -> Result<Affine, ItemError> {
        let location = self.location()?;
        let rotation = self.canvas_rotation()?;
        Ok(Affine::translation(location.x, location.y).rotate(rotation))
    }

    pub fn attrs(&self) -> &PaintAttrs {
        &self.attrs
    }

    pub fn pen(&self) -> Option<Pen> {
        self.attrs.pen
    }

    pub fn set_pen(&mut self, pen: Option<Pen>) {
        self.attrs.pen = pen;
    }

    pub fn shape(&self) -> Option<Shape> {
        self.attrs.shape
    }

    pub fn set_shape(&mut self, shape: Option<Shape>) {
        self.attrs.shape = shape;
    }

    pub fn size(&self) -> f32 {
        self.attrs.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.attrs.size = size;
    }

    pub fn color(&self) -> Option<Color> {
        self.attrs.color
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.attrs.color = color;
    }

    /// Whether the host should bake this item into the image as soon as it is
    /// added, instead of redrawing it from vector state every frame until save.
    pub fn is_draw_optimize(&self) -> bool {
        self.draw_optimize
    }

    /// Change the baking policy for future host decisions.
    ///
    /// Nothing is re-rendered; an already baked item stays baked.
    pub fn set_draw_optimize(&mut self, draw_optimize: bool) {
        if draw_optimize == self.draw_optimize {
            return;
        }
        self.draw_optimize = draw_optimize;
    }

    /// Whether the host should clip this item's output to the image bounds.
    pub fn is_clip_outside(&self) -> bool {
        self.clip_outside
    }

    pub fn set_clip_outside(&mut self, clip: bool) {
        self.clip_outside = clip;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::frame::ImageFrame;
    use proptest::prelude::*;

    fn right_angle() -> impl Strategy<Value = f32> {
        prop_oneof![Just(0.0f32), Just(90.0), Just(180.0), Just(270.0)]
    }

    proptest! {
        /// Property: set_location then location returns the input when the
        /// rotation does not change in between.
        #[test]
        fn prop_set_get_consistency(
            (width, height) in (1u32..=4000, 1u32..=4000),
            orientation in right_angle(),
            current in 0.0f32..360.0,
            (x, y) in (-1000.0f32..5000.0, -1000.0f32..5000.0),
        ) {
            let frame = Rc::new(ImageFrame::with_rotation(width, height, orientation).unwrap());
            let host: Rc<dyn GraffitiHost> = frame.clone();
            let mut base = ItemBase::attached(host, None);
            frame.set_rotation(current);

            let p = Point::new(x, y);
            base.set_location(p).unwrap();
            let back = base.location().unwrap();
            prop_assert!(back.distance_to(p) < 0.01, "{:?} -> {:?}", p, back);
        }

        /// Property: the canonical anchor is the same at every rotation it
        /// was set from, so a full cycle of right-angle turns returns home.
        #[test]
        fn prop_full_turn_returns_home(
            orientation in right_angle(),
            (x, y) in (0.0f32..800.0, 0.0f32..600.0),
        ) {
            let frame = Rc::new(ImageFrame::with_rotation(800, 600, orientation).unwrap());
            let host: Rc<dyn GraffitiHost> = frame.clone();
            let mut base = ItemBase::attached(host, None);
            let p = Point::new(x, y);
            base.set_location(p).unwrap();

            for _ in 0..4 {
                frame.rotate_by(90.0);
            }
            prop_assert!(base.location().unwrap().distance_to(p) < 0.01);
        }
    }
}
