use serde::{Deserialize, Serialize};

/// A detected joint position in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from a detector row `[x, y, ...]`.
    ///
    /// Columns past the second (depth, confidence) are dropped.
    /// Returns `None` when the row has fewer than two values.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        match row {
            [x, y, ..] => Some(Self::new(*x, *y)),
            _ => None,
        }
    }

    /// Vector from `origin` to `self`
    pub fn offset_from(self, origin: Point2D) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_drops_extra_columns() {
        let p = Point2D::from_row(&[3.0, 4.0, 0.92]).unwrap();
        assert_eq!(p, Point2D::new(3.0, 4.0));
    }

    #[test]
    fn test_from_row_too_short() {
        assert!(Point2D::from_row(&[1.0]).is_none());
        assert!(Point2D::from_row(&[]).is_none());
    }

    #[test]
    fn test_offset_from() {
        let v = Point2D::new(5.0, 1.0).offset_from(Point2D::new(2.0, 3.0));
        assert_eq!(v, (3.0, -2.0));
    }
}
