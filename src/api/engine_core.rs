use crate::core::{
    BrushExtent, DataSet, LinearScale, Margins, RawDataSet, ScatterPoint, SelectionState,
    TransformedScale, ViewTransform, bind_dataset, bind_points, compute_scales, nearest_point,
};
use crate::error::ScatterResult;

use super::config::ScatterEngineConfig;
use super::sink::SelectionSettings;

/// Engine state without the renderer/sink collaborators.
///
/// Owning dataset, scales, transform, selection, and brush as plain fields
/// keeps the gesture handlers free of shared mutable closures: each handler
/// is a method that reads and writes this struct directly.
#[derive(Debug, Clone)]
pub(super) struct EngineCore {
    pub(super) config: ScatterEngineConfig,
    pub(super) dataset: DataSet,
    pub(super) margins: Margins,
    pub(super) x_base: LinearScale,
    pub(super) y_base: LinearScale,
    pub(super) transform: ViewTransform,
    pub(super) selection: SelectionState,
    pub(super) brush: Option<BrushExtent>,
}

impl EngineCore {
    pub(super) fn new(config: ScatterEngineConfig, raw: &RawDataSet) -> ScatterResult<Self> {
        let dataset = bind_dataset(raw, config.styles)?;
        let margins = config
            .base_margins
            .adjusted_for_titles(dataset.x_title.is_some(), dataset.y_title.is_some());
        let (x_base, y_base) = compute_scales(&dataset.points, config.viewport, margins)?;

        Ok(Self {
            config,
            dataset,
            margins,
            x_base,
            y_base,
            transform: ViewTransform::default(),
            selection: SelectionState::default(),
            brush: None,
        })
    }

    pub(super) fn x_view(&self) -> TransformedScale {
        self.transform.x_view(self.x_base)
    }

    pub(super) fn y_view(&self) -> TransformedScale {
        self.transform.y_view(self.y_base)
    }

    /// Click selection: any click clears `selected`; a resolved point becomes
    /// the sole highlight, otherwise the highlight clears too.
    ///
    /// Returns the resolved point for the hover notification.
    pub(super) fn click(&mut self, px: f64, py: f64) -> Option<ScatterPoint> {
        let found =
            nearest_point(&self.dataset.points, (px, py), self.x_view(), self.y_view()).copied();

        match found {
            Some(point) => self.selection.highlight_only(point.index),
            None => self.selection.clear_highlighted(),
        }
        self.selection.clear_selected();
        found
    }

    /// Brush start: highlighting clears, and a click without extent toggles
    /// the nearest point in `selected`.
    pub(super) fn brush_start(&mut self, px: f64, py: f64) {
        self.selection.clear_highlighted();
        if let Some(found) =
            nearest_point(&self.dataset.points, (px, py), self.x_view(), self.y_view())
        {
            self.selection.toggle_selected(found.index);
        }
    }

    /// Brush drag: recomputes `selected` from the data-space extent while the
    /// extent has non-zero width and height. The extent stays visible either
    /// way.
    pub(super) fn brush_drag(&mut self, start_px: (f64, f64), current_px: (f64, f64)) {
        let x_view = self.x_view();
        let y_view = self.y_view();
        let extent = BrushExtent::from_corners(
            (x_view.to_data(start_px.0), y_view.to_data(start_px.1)),
            (x_view.to_data(current_px.0), y_view.to_data(current_px.1)),
        );

        if !extent.is_empty() {
            self.selection
                .replace_selected(extent.member_indices(&self.dataset.points));
        }
        self.brush = Some(extent);
    }

    /// Brush end: snapshots the selection for the commit and resets the
    /// visual extent so the rectangle disappears after release.
    pub(super) fn brush_end(&mut self) -> SelectionSettings {
        self.brush = None;

        let selected: Vec<usize> = self.selection.selected().iter().copied().collect();
        let mut x = Vec::with_capacity(selected.len());
        let mut y = Vec::with_capacity(selected.len());
        for &index in &selected {
            // Indices are dense, so position lookup is direct.
            if let Some(point) = self.dataset.points.get(index) {
                x.push(point.x);
                y.push(point.y);
            }
        }

        SelectionSettings { selected, x, y }
    }

    pub(super) fn pan(&mut self, dx_px: f64, dy_px: f64) -> ScatterResult<()> {
        self.transform.pan_by(dx_px, dy_px)
    }

    pub(super) fn zoom(
        &mut self,
        factor_x: f64,
        factor_y: f64,
        anchor_x_px: f64,
        anchor_y_px: f64,
    ) -> ScatterResult<()> {
        self.transform
            .zoom_around(factor_x, factor_y, anchor_x_px, anchor_y_px)
    }

    /// Replaces the dataset wholesale: indices reset to `0..n-1` and base
    /// scales are re-derived. The view transform survives.
    pub(super) fn update_data(&mut self, raw: &RawDataSet) -> ScatterResult<()> {
        let dataset = bind_dataset(raw, self.config.styles)?;
        let (x_base, y_base) = compute_scales(&dataset.points, self.config.viewport, self.margins)?;

        self.dataset = dataset;
        self.x_base = x_base;
        self.y_base = y_base;
        Ok(())
    }

    /// Concatenates points; new indices continue from the prior maximum + 1.
    /// Base scales and transform are untouched.
    pub(super) fn append_data(&mut self, raw: &RawDataSet) -> ScatterResult<()> {
        let more = bind_points(raw, self.config.styles, self.dataset.points.len())?;
        self.dataset.points.extend(more);
        Ok(())
    }
}
