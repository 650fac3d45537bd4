//! The host side of an item binding.
//!
//! Items never own the image they annotate. They read two things from the
//! host: its rotation right now, and (once, at bind time) the size of the
//! bitmap it currently stores.
//!
//! [`ImageFrame`] is a ready-made host state for single-threaded views. Views
//! usually keep it behind an `Rc` and hand clones to the items they add.

mod orientation;

use std::cell::Cell;

use image::GenericImageView;

use crate::error::FrameError;
use crate::transform::{canonical_dimensions, normalize_degrees};

pub use orientation::{read_orientation, try_read_orientation, Orientation};

/// What an item needs from the view that shows the image.
pub trait GraffitiHost {
    /// Current rotation of the image in degrees (positive = clockwise).
    fn rotation(&self) -> f32;

    /// Pixel size of the stored bitmap as currently rotated.
    ///
    /// At 90° and 270° this is the canonical size transposed.
    fn bitmap_size(&self) -> (u32, u32);
}

/// Rotation and size of the image a view is showing.
///
/// Uses `Cell` so a view can rotate the image while items hold `Rc` clones.
#[derive(Debug)]
pub struct ImageFrame {
    /// Width of the original, unrotated content
    width: Cell<u32>,
    /// Height of the original, unrotated content
    height: Cell<u32>,
    rotation: Cell<f32>,
}

impl ImageFrame {
    /// Create a frame for unrotated content of the given size.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, FrameError> {
        Self::with_rotation(width, height, 0.0)
    }

    /// Create a frame for content of the given size, already shown at `rotation`.
    pub fn with_rotation(width: u32, height: u32, rotation: f32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width: Cell::new(width),
            height: Cell::new(height),
            rotation: Cell::new(normalize_degrees(rotation)),
        })
    }

    /// Create a frame for raw stored pixels, rotated upright per EXIF.
    ///
    /// Mirroring is not a rotation and is left to the view.
    pub fn with_orientation(
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> Result<Self, FrameError> {
        Self::with_rotation(width, height, orientation.rotation_degrees())
    }

    /// Create an unrotated frame sized to an image.
    pub fn from_image<I: GenericImageView>(image: &I) -> Result<Self, FrameError> {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    /// Size of the original, unrotated content.
    pub fn canonical_size(&self) -> (u32, u32) {
        (self.width.get(), self.height.get())
    }

    /// Set the absolute rotation in degrees.
    pub fn set_rotation(&self, degrees: f32) {
        let degrees = normalize_degrees(degrees);
        log::trace!("frame rotation {} -> {}", self.rotation.get(), degrees);
        self.rotation.set(degrees);
    }

    /// Turn the image by `degrees` relative to its current rotation.
    pub fn rotate_by(&self, degrees: f32) {
        self.set_rotation(self.rotation.get() + degrees);
    }

    /// Swap in a new bitmap, given in its stored (currently rotated) size.
    ///
    /// Items bound earlier keep the pivot they captured.
    pub fn replace_bitmap(&self, width: u32, height: u32) -> Result<(), FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        let (w, h) = canonical_dimensions(width, height, self.rotation.get());
        self.width.set(w);
        self.height.set(h);
        Ok(())
    }
}

impl GraffitiHost for ImageFrame {
    fn rotation(&self) -> f32 {
        self.rotation.get()
    }

    fn bitmap_size(&self) -> (u32, u32) {
        // Transposing is its own inverse, so the same swap rule applies
        canonical_dimensions(self.width.get(), self.height.get(), self.rotation.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_unrotated() {
        let frame = ImageFrame::new(400, 300).unwrap();
        assert_eq!(frame.rotation(), 0.0);
        assert_eq!(frame.bitmap_size(), (400, 300));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            ImageFrame::new(0, 10),
            Err(FrameError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
        let frame = ImageFrame::new(10, 10).unwrap();
        assert!(frame.replace_bitmap(10, 0).is_err());
    }

    #[test]
    fn test_bitmap_size_transposes_at_right_angles() {
        let frame = ImageFrame::new(400, 300).unwrap();
        frame.rotate_by(90.0);
        assert_eq!(frame.bitmap_size(), (300, 400));
        frame.rotate_by(90.0);
        assert_eq!(frame.bitmap_size(), (400, 300));
        frame.rotate_by(90.0);
        assert_eq!(frame.bitmap_size(), (300, 400));
        frame.rotate_by(90.0);
        assert_eq!(frame.rotation(), 0.0);
    }

    #[test]
    fn test_set_rotation_normalizes() {
        let frame = ImageFrame::new(10, 10).unwrap();
        frame.set_rotation(-90.0);
        assert_eq!(frame.rotation(), 270.0);
        frame.set_rotation(720.0);
        assert_eq!(frame.rotation(), 0.0);
    }

    #[test]
    fn test_replace_bitmap_stores_canonical_size() {
        let frame = ImageFrame::with_rotation(400, 300, 90.0).unwrap();
        // A stored 200x100 bitmap at 90 degrees is 100x200 canonically
        frame.replace_bitmap(200, 100).unwrap();
        assert_eq!(frame.canonical_size(), (100, 200));
        assert_eq!(frame.bitmap_size(), (200, 100));
    }

    #[test]
    fn test_with_orientation() {
        let frame = ImageFrame::with_orientation(600, 400, Orientation::Rotate90CW).unwrap();
        assert_eq!(frame.rotation(), 90.0);
        assert_eq!(frame.canonical_size(), (600, 400));
        assert_eq!(frame.bitmap_size(), (400, 600));
    }

    #[test]
    fn test_from_image() {
        let img = image::RgbImage::new(32, 16);
        let frame = ImageFrame::from_image(&img).unwrap();
        assert_eq!(frame.canonical_size(), (32, 16));
    }
}
