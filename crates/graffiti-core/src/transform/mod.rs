//! Rotation-aware coordinate transform between canonical and display space.
//!
//! Items store their anchor relative to the image's original, unrotated
//! content (canonical space). What the user sees is the image after its
//! present rotation (display space). This module converts between the two.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Angles are in degrees, positive = clockwise on screen
//! - This matches [`crate::surface::Surface::rotate`], so a point mapped with
//!   [`to_display`] lands where a surface rotated by the same delta draws it

mod rotation;

pub use rotation::{
    canonical_dimensions, canonical_pivot, normalize_degrees, rotate_point, to_canonical,
    to_display,
};
