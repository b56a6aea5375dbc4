use crate::core::types::ScatterPoint;

/// Data-space rectangular brush region, normalized to (min, max) per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushExtent {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl BrushExtent {
    /// Builds an extent from two opposite corners in data space.
    #[must_use]
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x_min: a.0.min(b.0),
            x_max: a.0.max(b.0),
            y_min: a.1.min(b.1),
            y_max: a.1.max(b.1),
        }
    }

    #[must_use]
    pub fn x_bounds(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_bounds(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// An extent with zero width or zero height selects nothing.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x_min == self.x_max || self.y_min == self.y_max
    }

    /// Membership is strict on all four sides: boundary points are excluded.
    #[must_use]
    pub fn contains(self, point: &ScatterPoint) -> bool {
        point.x > self.x_min && point.x < self.x_max && point.y > self.y_min && point.y < self.y_max
    }

    /// Indices of member points, in dataset order.
    #[must_use]
    pub fn member_indices(self, points: &[ScatterPoint]) -> Vec<usize> {
        points
            .iter()
            .filter(|point| self.contains(point))
            .map(|point| point.index)
            .collect()
    }
}
