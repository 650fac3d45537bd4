//! EXIF orientation, used to seed a frame's initial rotation.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (rotate 90 CW + flip horizontal).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (rotate 270 CW + flip horizontal).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Clockwise rotation in degrees needed to display the stored pixels upright.
    ///
    /// Mirrored variants report only their rotation component; see
    /// [`Orientation::is_mirrored`].
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Orientation::Normal | Orientation::FlipHorizontal => 0.0,
            Orientation::Rotate90CW | Orientation::Transpose => 90.0,
            Orientation::Rotate180 | Orientation::FlipVertical => 180.0,
            Orientation::Rotate270CW | Orientation::Transverse => 270.0,
        }
    }

    /// Returns true if displaying upright also needs a horizontal flip.
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::FlipHorizontal
                | Orientation::FlipVertical
                | Orientation::Transpose
                | Orientation::Transverse
        )
    }

    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Read the EXIF orientation from image file bytes.
///
/// # Errors
///
/// Returns `FrameError::Exif` if the container has no readable EXIF block.
pub fn try_read_orientation(bytes: &[u8]) -> Result<Orientation, FrameError> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| FrameError::Exif(e.to_string()))?;

    Ok(exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default())
}

/// Read the EXIF orientation, treating missing or unreadable metadata as `Normal`.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    match try_read_orientation(bytes) {
        Ok(orientation) => orientation,
        Err(e) => {
            log::debug!("no usable EXIF orientation ({}), assuming Normal", e);
            Orientation::Normal
        }
    }
}
