use crate::core::types::{Margins, ScatterPoint, Viewport};
use crate::error::{ScatterError, ScatterResult};

/// Ratio of the data extent added as padding on each side of a domain.
pub const DOMAIN_PADDING_RATIO: f64 = 0.1;

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (used for the y axis so increasing data values
/// move up on screen). A zero-width domain is allowed: every value then maps
/// to the middle of the range, and `to_data` returns the domain value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        for (name, value) in [
            ("domain start", domain.0),
            ("domain end", domain.1),
            ("range start", range.0),
            ("range end", range.1),
        ] {
            if !value.is_finite() {
                return Err(ScatterError::InvalidData(format!(
                    "scale {name} must be finite"
                )));
            }
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            // Degenerate domain: park everything at the range midpoint
            // instead of dividing by zero.
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn to_data(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.domain_end == self.domain_start {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Derives the base x/y scales for a bound point set.
///
/// Domains are padded by `DOMAIN_PADDING_RATIO` of the observed extent on
/// both ends; a zero-width extent pads by zero. The x range spans the plot
/// width, the y range is inverted over the plot height.
pub fn compute_scales(
    points: &[ScatterPoint],
    viewport: Viewport,
    margins: Margins,
) -> ScatterResult<(LinearScale, LinearScale)> {
    if !viewport.is_valid() {
        return Err(ScatterError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    if points.is_empty() {
        return Err(ScatterError::InvalidData(
            "scales cannot be computed from an empty dataset".to_owned(),
        ));
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(ScatterError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    let x_pad = (x_max - x_min) * DOMAIN_PADDING_RATIO;
    let y_pad = (y_max - y_min) * DOMAIN_PADDING_RATIO;

    let x_scale = LinearScale::new(
        (x_min - x_pad, x_max + x_pad),
        (0.0, margins.plot_width(viewport)),
    )?;
    let y_scale = LinearScale::new(
        (y_min - y_pad, y_max + y_pad),
        (margins.plot_height(viewport), 0.0),
    )?;

    Ok((x_scale, y_scale))
}
