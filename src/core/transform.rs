use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::error::{ScatterError, ScatterResult};

/// Pan/zoom state applied on top of the base scales, independently per axis.
///
/// The effective pixel mapping for a value `v` on one axis is
/// `base.to_pixel(v) * scale + translate`. The transform is created with the
/// engine and deliberately survives `update_data`/`append_data`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    x_scale: f64,
    x_translate: f64,
    y_scale: f64,
    y_translate: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            x_translate: 0.0,
            y_scale: 1.0,
            y_translate: 0.0,
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::default()
    }

    #[must_use]
    pub fn scale_factors(self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }

    #[must_use]
    pub fn translates(self) -> (f64, f64) {
        (self.x_translate, self.y_translate)
    }

    /// Translates the view by a pixel delta.
    pub fn pan_by(&mut self, dx_px: f64, dy_px: f64) -> ScatterResult<()> {
        if !dx_px.is_finite() || !dy_px.is_finite() {
            return Err(ScatterError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.x_translate += dx_px;
        self.y_translate += dy_px;
        Ok(())
    }

    /// Zooms per axis around an anchor pixel, keeping the anchor stationary.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out.
    pub fn zoom_around(
        &mut self,
        factor_x: f64,
        factor_y: f64,
        anchor_x_px: f64,
        anchor_y_px: f64,
    ) -> ScatterResult<()> {
        for (name, factor) in [("x", factor_x), ("y", factor_y)] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "{name} zoom factor must be finite and > 0"
                )));
            }
        }
        if !anchor_x_px.is_finite() || !anchor_y_px.is_finite() {
            return Err(ScatterError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }

        self.x_scale *= factor_x;
        self.x_translate = anchor_x_px - (anchor_x_px - self.x_translate) * factor_x;
        self.y_scale *= factor_y;
        self.y_translate = anchor_y_px - (anchor_y_px - self.y_translate) * factor_y;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Composes this transform's x component with a base scale.
    #[must_use]
    pub fn x_view(self, base: LinearScale) -> TransformedScale {
        TransformedScale {
            base,
            axis_scale: self.x_scale,
            axis_translate: self.x_translate,
        }
    }

    /// Composes this transform's y component with a base scale.
    #[must_use]
    pub fn y_view(self, base: LinearScale) -> TransformedScale {
        TransformedScale {
            base,
            axis_scale: self.y_scale,
            axis_translate: self.y_translate,
        }
    }
}

/// Effective one-axis mapping: base scale composed with the view transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedScale {
    base: LinearScale,
    axis_scale: f64,
    axis_translate: f64,
}

impl TransformedScale {
    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        self.base.to_pixel(value) * self.axis_scale + self.axis_translate
    }

    #[must_use]
    pub fn to_data(self, pixel: f64) -> f64 {
        self.base
            .to_data((pixel - self.axis_translate) / self.axis_scale)
    }

    /// Visible data interval covering a pixel range, in pixel order.
    #[must_use]
    pub fn visible_domain(self, range_start_px: f64, range_end_px: f64) -> (f64, f64) {
        (self.to_data(range_start_px), self.to_data(range_end_px))
    }
}
