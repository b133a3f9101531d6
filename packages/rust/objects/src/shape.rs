//! Plain shape values with an `area()` method.

use serde::{Deserialize, Serialize};

/// Anything with a name and a computable area.
pub trait Shape {
    fn area(&self) -> f64;

    /// Human-readable shape name for display and tracing.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Rectangle
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle with integer sides.
///
/// Serializes as `{"width":10,"height":20}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width * height`, widened so the product cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        Rectangle::area(self) as f64
    }

    fn name(&self) -> &str {
        "rectangle"
    }
}

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn name(&self) -> &str {
        "circle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_fields_and_area() {
        let r = Rectangle::new(10, 20);
        assert_eq!(r.width, 10);
        assert_eq!(r.height, 20);
        assert_eq!(r.area(), 200);
    }

    #[test]
    fn rectangle_area_does_not_overflow() {
        let r = Rectangle::new(u32::MAX, 2);
        assert_eq!(r.area(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn shapes_through_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(3, 4)), Box::new(Circle::new(1.0))];
        let names: Vec<&str> = shapes.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["rectangle", "circle"]);
        assert_eq!(shapes[0].area(), 12.0);
        assert!((shapes[1].area() - std::f64::consts::PI).abs() < 1e-12);
    }
}
