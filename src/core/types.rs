use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 20.0,
            left: 45.0,
        }
    }
}

impl Margins {
    /// Widens the label-bearing sides when axis titles are present.
    ///
    /// The increments are fixed pixel amounts, not proportional to the
    /// viewport.
    #[must_use]
    pub fn adjusted_for_titles(mut self, has_x_title: bool, has_y_title: bool) -> Self {
        if has_x_title {
            self.bottom = self.bottom.max(57.0);
        }
        if has_y_title {
            self.left = self.left.max(70.0);
        }
        self
    }

    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - self.left - self.right
    }

    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> f64 {
        f64::from(viewport.height) - self.top - self.bottom
    }
}

/// One bound data record with its per-point render attributes.
///
/// `index` is the stable selection key: unique, assigned in input order, and
/// never reassigned after creation. Appended points continue the sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub index: usize,
    pub fill: Color,
    pub stroke: Color,
    pub radius: f64,
    pub alpha: f64,
}

/// Bound dataset owned by the engine instance.
///
/// Replaced wholesale by `update_data`, extended in place by `append_data`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    pub points: Vec<ScatterPoint>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
}
