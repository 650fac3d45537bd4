//! WASM bindings for the canonical/display coordinate mapping.
//!
//! Useful for hit testing pointer events against canonical geometry without
//! creating an anchor.

use graffiti_core::transform::{to_canonical as core_to_canonical, to_display as core_to_display};
use graffiti_core::Point;
use wasm_bindgen::prelude::*;

/// Map a canonical point to display space.
///
/// # Arguments
///
/// * `x`, `y` - Point relative to the unrotated image content
/// * `orientation` - Image rotation when the item was bound (degrees)
/// * `current_rotation` - Image rotation now (degrees, positive = clockwise)
/// * `pivot_x`, `pivot_y` - Canonical image center
///
/// # Returns
///
/// `[x, y]` in display space.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const [dx, dy] = to_display(60, 50, 0, 90, 50, 50); // [50, 60]
/// ```
#[wasm_bindgen]
pub fn to_display(
    x: f32,
    y: f32,
    orientation: f32,
    current_rotation: f32,
    pivot_x: f32,
    pivot_y: f32,
) -> Vec<f32> {
    let p = core_to_display(
        Point::new(x, y),
        orientation,
        current_rotation,
        Point::new(pivot_x, pivot_y),
    );
    vec![p.x, p.y]
}

/// Map a displayed point back to canonical space.
///
/// Inverse of `to_display` for the same orientation, rotation and pivot.
#[wasm_bindgen]
pub fn to_canonical(
    x: f32,
    y: f32,
    orientation: f32,
    current_rotation: f32,
    pivot_x: f32,
    pivot_y: f32,
) -> Vec<f32> {
    let p = core_to_canonical(
        Point::new(x, y),
        orientation,
        current_rotation,
        Point::new(pivot_x, pivot_y),
    );
    vec![p.x, p.y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_display_no_rotation() {
        assert_eq!(to_display(10.0, 20.0, 0.0, 0.0, 50.0, 50.0), vec![10.0, 20.0]);
    }

    #[test]
    fn test_to_display_quarter_turn() {
        let p = to_display(60.0, 50.0, 0.0, 90.0, 50.0, 50.0);
        assert!((p[0] - 50.0).abs() < 1e-3);
        assert!((p[1] - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let shown = to_display(123.0, 45.0, 90.0, 0.0, 64.0, 32.0);
        let back = to_canonical(shown[0], shown[1], 90.0, 0.0, 64.0, 32.0);
        assert!((back[0] - 123.0).abs() < 1e-3);
        assert!((back[1] - 45.0).abs() < 1e-3);
    }
}
