//! Point rotation about a pivot, and the canonical/display mapping built on it.
//!
//! # Algorithm
//!
//! For an image bound at `orientation` and now shown at `current`, the image
//! content has turned by `delta = normalize(current - orientation)`. A
//! canonical point is carried along by rotating it about the pivot:
//! ```text
//! x' = px + (x - px) * cos(delta) - (y - py) * sin(delta)
//! y' = py + (x - px) * sin(delta) + (y - py) * cos(delta)
//! ```
//! The inverse applies the same rotation by `-delta`.

use crate::geometry::Point;

/// Tolerance used when matching angles against right angles.
const ANGLE_EPSILON: f32 = 0.001;

/// Normalize an angle in degrees into `[0, 360)`.
///
/// # Example
///
/// ```
/// use graffiti_core::transform::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// ```
pub fn normalize_degrees(degrees: f32) -> f32 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to 360.0 in f32
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Rotate `point` about `pivot` by `degrees` (positive = clockwise on screen).
///
/// Rotations by a whole number of turns return `point` unchanged, bit for bit.
/// The trigonometry runs in `f64` to keep round trips tight on large images.
pub fn rotate_point(point: Point, degrees: f32, pivot: Point) -> Point {
    let degrees = normalize_degrees(degrees);
    if degrees == 0.0 {
        return point;
    }

    let rad = (degrees as f64).to_radians();
    let (sin, cos) = rad.sin_cos();

    let dx = point.x as f64 - pivot.x as f64;
    let dy = point.y as f64 - pivot.y as f64;

    Point {
        x: (pivot.x as f64 + dx * cos - dy * sin) as f32,
        y: (pivot.y as f64 + dx * sin + dy * cos) as f32,
    }
}

/// Map a canonical point to where it is displayed now.
///
/// # Arguments
///
/// * `canonical` - Point relative to the image's original, unrotated content
/// * `orientation` - Image rotation captured when the item was bound
/// * `current_rotation` - Image rotation right now
/// * `pivot` - Image center in canonical space, captured at bind time
pub fn to_display(canonical: Point, orientation: f32, current_rotation: f32, pivot: Point) -> Point {
    let delta = normalize_degrees(current_rotation - orientation);
    rotate_point(canonical, delta, pivot)
}

/// Map a displayed point back to canonical space.
///
/// Exact inverse of [`to_display`] for the same parameters, within float
/// tolerance.
pub fn to_canonical(display: Point, orientation: f32, current_rotation: f32, pivot: Point) -> Point {
    let delta = normalize_degrees(current_rotation - orientation);
    rotate_point(display, -delta, pivot)
}

/// Recover the canonical width and height of a stored bitmap.
///
/// A bitmap rotated by 90° or 270° stores its width and height transposed
/// relative to its canonical content, so those two rotations swap them back.
///
/// # Example
///
/// ```
/// use graffiti_core::transform::canonical_dimensions;
///
/// assert_eq!(canonical_dimensions(100, 50, 90.0), (50, 100));
/// assert_eq!(canonical_dimensions(100, 50, 180.0), (100, 50));
/// ```
pub fn canonical_dimensions(width: u32, height: u32, rotation: f32) -> (u32, u32) {
    let normalized = normalize_degrees(rotation);
    if (normalized - 90.0).abs() < ANGLE_EPSILON || (normalized - 270.0).abs() < ANGLE_EPSILON {
        (height, width)
    } else {
        (width, height)
    }
}

/// Center of the image in canonical space.
///
/// Halving uses integer division of the pixel dimensions, so the pivot always
/// sits on a whole pixel coordinate.
pub fn canonical_pivot(width: u32, height: u32, rotation: f32) -> Point {
    let (w, h) = canonical_dimensions(width, height, rotation);
    Point::new((w / 2) as f32, (h / 2) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance_to(expected) < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    /// Rotation matrix written out longhand, independent of `rotate_point`.
    fn matrix_rotate(p: Point, degrees: f32, pivot: Point) -> Point {
        let t = (degrees as f64).to_radians();
        let dx = (p.x - pivot.x) as f64;
        let dy = (p.y - pivot.y) as f64;
        Point::new(
            (pivot.x as f64 + dx * t.cos() - dy * t.sin()) as f32,
            (pivot.y as f64 + dx * t.sin() + dy * t.cos()) as f32,
        )
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        let r = normalize_degrees(-1e-9);
        assert!((0.0..360.0).contains(&r), "got {}", r);
    }

    #[test]
    fn test_zero_delta_is_exact_identity() {
        let p = Point::new(10.0, 20.0);
        let pivot = Point::new(50.0, 50.0);
        assert_eq!(to_display(p, 0.0, 0.0, pivot), p);
        assert_eq!(to_canonical(p, 0.0, 0.0, pivot), p);
        // Full turn between orientation and current rotation
        assert_eq!(to_display(p, 90.0, 450.0, pivot), p);
    }

    #[test]
    fn test_rotation_tracking_matches_matrix() {
        let pivot = Point::new(50.0, 50.0);
        let canonical = Point::new(60.0, 50.0);

        assert_eq!(to_display(canonical, 0.0, 0.0, pivot), canonical);

        let shown = to_display(canonical, 0.0, 90.0, pivot);
        assert_close(shown, matrix_rotate(canonical, 90.0, pivot));
        // Clockwise on screen: a point right of the pivot ends up below it
        assert_close(shown, Point::new(50.0, 60.0));
    }

    #[test]
    fn test_delta_uses_orientation() {
        let pivot = Point::new(100.0, 40.0);
        let p = Point::new(130.0, 10.0);
        // Bound at 90, now at 180: only a 90 degree change happened
        let shown = to_display(p, 90.0, 180.0, pivot);
        assert_close(shown, matrix_rotate(p, 90.0, pivot));
    }

    #[test]
    fn test_negative_delta_wraps() {
        let pivot = Point::new(0.0, 0.0);
        let p = Point::new(10.0, 0.0);
        // 0 -> 270 is the same as turning back 90 degrees
        let shown = to_display(p, 0.0, 270.0, pivot);
        assert_close(shown, Point::new(0.0, -10.0));
        let shown = to_display(p, 90.0, 0.0, pivot);
        assert_close(shown, Point::new(0.0, -10.0));
    }

    #[test]
    fn test_continuous_delta() {
        let pivot = Point::new(20.0, 30.0);
        let p = Point::new(25.0, 35.0);
        let shown = to_display(p, 0.0, 37.5, pivot);
        assert_close(shown, matrix_rotate(p, 37.5, pivot));
        assert_close(to_canonical(shown, 0.0, 37.5, pivot), p);
    }

    #[test]
    fn test_pivot_is_fixed_point() {
        let pivot = Point::new(64.0, 48.0);
        for current in [0.0, 90.0, 180.0, 270.0, 12.0] {
            assert_close(to_display(pivot, 0.0, current, pivot), pivot);
        }
    }

    #[test]
    fn test_canonical_dimensions_swap_rule() {
        assert_eq!(canonical_dimensions(100, 50, 0.0), (100, 50));
        assert_eq!(canonical_dimensions(100, 50, 90.0), (50, 100));
        assert_eq!(canonical_dimensions(100, 50, 180.0), (100, 50));
        assert_eq!(canonical_dimensions(100, 50, 270.0), (50, 100));
        assert_eq!(canonical_dimensions(100, 50, -90.0), (50, 100));
        assert_eq!(canonical_dimensions(100, 50, -270.0), (50, 100));
        assert_eq!(canonical_dimensions(100, 50, 45.0), (100, 50));
    }

    #[test]
    fn test_canonical_pivot_integer_halving() {
        assert_eq!(canonical_pivot(100, 60, 0.0), Point::new(50.0, 30.0));
        assert_eq!(canonical_pivot(101, 61, 0.0), Point::new(50.0, 30.0));
        // Stored 60x100 at 90 degrees is canonically 100x60
        assert_eq!(canonical_pivot(60, 100, 90.0), Point::new(50.0, 30.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
