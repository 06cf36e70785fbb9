//! Two-point helpers used by pinch and two-finger rotation.

use crate::Point;

/// Euclidean distance between two points.
pub fn distance_between_points(a: Point, b: Point) -> f64 {
    (a.y - b.y).hypot(a.x - b.x)
}

/// Angle of the segment from `a` to `b`, in degrees.
pub fn rotation_between_points(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Midpoint of two points.
pub fn center(a: Point, b: Point) -> Point {
    Point {
        x: (b.x + a.x) / 2.0,
        y: (b.y + a.y) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance_between_points(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(12.0, -3.0);
        let b = Point::new(-7.5, 9.0);
        assert_eq!(distance_between_points(a, b), distance_between_points(b, a));
    }

    #[test]
    fn test_center() {
        let c = center(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(c, Point::new(50.0, 25.0));
    }

    #[test]
    fn test_rotation_axes() {
        let origin = Point::new(0.0, 0.0);
        assert!((rotation_between_points(origin, Point::new(10.0, 0.0)) - 0.0).abs() < 1e-12);
        assert!((rotation_between_points(origin, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-12);
        assert!((rotation_between_points(origin, Point::new(-10.0, 0.0)) - 180.0).abs() < 1e-12);
        assert!((rotation_between_points(origin, Point::new(0.0, -10.0)) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_delta_between_frames() {
        // Second finger sweeps a quarter turn around the first
        let a = Point::new(100.0, 100.0);
        let before = rotation_between_points(a, Point::new(200.0, 100.0));
        let after = rotation_between_points(a, Point::new(100.0, 200.0));
        assert!((after - before - 90.0).abs() < 1e-9);
    }
}
