//! Appearance attributes carried by every item.

use serde::{Deserialize, Serialize};

/// Kind of pen an item was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pen {
    /// Plain brush strokes
    Hand,
    /// Copies pixels from another part of the image
    Copy,
    /// Reveals the original image underneath
    Eraser,
    Text,
    Bitmap,
    Mosaic,
}

/// Geometric shape an item traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    HandWrite,
    Arrow,
    Line,
    FillCircle,
    HollowCircle,
    FillRect,
    HollowRect,
}

/// 8-bit RGBA color (not premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Appearance bundle used to seed new items.
///
/// Copied into each item at construction; later edits to the bundle do not
/// reach items that were already created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintAttrs {
    pub pen: Option<Pen>,
    pub shape: Option<Shape>,
    /// Stroke size in image pixels
    pub size: f32,
    pub color: Option<Color>,
}

impl PaintAttrs {
    pub fn new(pen: Pen, shape: Shape, size: f32, color: Color) -> Self {
        Self {
            pen: Some(pen),
            shape: Some(shape),
            size,
            color: Some(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attrs_are_unset() {
        let attrs = PaintAttrs::default();
        assert!(attrs.pen.is_none());
        assert!(attrs.shape.is_none());
        assert!(attrs.color.is_none());
        assert_eq!(attrs.size, 0.0);
    }

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, 255));
        assert_eq!(Color::WHITE.a, 255);
    }
}
