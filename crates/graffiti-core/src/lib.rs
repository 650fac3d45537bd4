//! Graffiti Core - rotation-aware annotation items
//!
//! This crate lets a view place annotation items (paths, shapes, text) on an
//! image that can be reoriented in steps, while every item stays anchored to
//! the same spot of the image content.
//!
//! # Module Structure
//!
//! - `transform` - Canonical/display coordinate mapping
//! - `item` - Item base state and the draw contract concrete items implement
//! - `frame` - What items read from their host view, plus a ready-made host
//! - `surface` - Save/restore drawing surfaces (matrix-only and tiny-skia)
//! - `paint` - Pen, shape, size and color attributes
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use graffiti_core::{GraffitiHost, ImageFrame, ItemBase, Point};
//!
//! let frame = Rc::new(ImageFrame::new(800, 600)?);
//! let host: Rc<dyn GraffitiHost> = frame.clone();
//! let mut base = ItemBase::attached(host, None);
//! base.set_location(Point::new(500.0, 300.0))?;
//!
//! frame.rotate_by(90.0);
//! // Still on the same pixel of the photo, now shown rotated
//! let shown = base.location()?;
//! ```

pub mod error;
pub mod frame;
pub mod geometry;
pub mod item;
pub mod paint;
pub mod surface;
pub mod transform;

pub use error::{DrawError, FrameError, ItemError};
pub use frame::{GraffitiHost, ImageFrame, Orientation};
pub use geometry::{Affine, Point};
pub use item::{GraffitiItem, ItemBase};
pub use paint::{Color, PaintAttrs, Pen, Shape};
pub use surface::{PixmapSurface, SaveGuard, Surface, TransformStack};
pub use transform::{to_canonical, to_display};
