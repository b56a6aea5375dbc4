use crate::core::{BrushExtent, DataSet, Margins, RawDataSet, ViewTransform};
use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

use super::config::ScatterEngineConfig;
use super::engine_core::EngineCore;
use super::frame_builder::build_frame;
use super::sink::SelectionSink;

/// Main orchestration facade consumed by host applications.
///
/// `ScatterEngine` owns the dataset, scales, view transform, and selection
/// state, and coordinates gesture handling, redraws, and commits to the
/// external sink. Gesture coordinates are plot-area-local pixels (the same
/// space the base scale ranges map into).
pub struct ScatterEngine<R: Renderer, S: SelectionSink> {
    renderer: R,
    sink: S,
    core: EngineCore,
}

impl<R: Renderer, S: SelectionSink> ScatterEngine<R, S> {
    /// Binds the raw dataset, derives margins and base scales, and starts
    /// with an identity view transform and empty selection.
    pub fn new(
        renderer: R,
        sink: S,
        config: ScatterEngineConfig,
        raw: &RawDataSet,
    ) -> ScatterResult<Self> {
        Ok(Self {
            renderer,
            sink,
            core: EngineCore::new(config, raw)?,
        })
    }

    /// Initial draw after construction; the host lifecycle entry point.
    pub fn render(&mut self) -> ScatterResult<()> {
        self.redraw()
    }

    /// Rebuilds the frame from current state and hands it to the renderer.
    ///
    /// Redraws are idempotent: identical state produces an identical frame.
    pub fn redraw(&mut self) -> ScatterResult<()> {
        let frame = build_frame(&self.core)?;
        self.renderer.render(&frame)
    }

    /// Materializes the scene without invoking the renderer.
    pub fn build_frame(&self) -> ScatterResult<RenderFrame> {
        build_frame(&self.core)
    }

    /// Replaces the dataset; indices reset to `0..n-1`, base scales are
    /// re-derived, and the pan/zoom transform is deliberately preserved.
    pub fn update_data(&mut self, raw: &RawDataSet) -> ScatterResult<()> {
        self.core.update_data(raw)?;
        tracing::debug!(points = self.core.dataset.points.len(), "dataset replaced");
        self.redraw()
    }

    /// Appends points with indices continuing the existing sequence; scales
    /// and transform are untouched.
    pub fn append_data(&mut self, raw: &RawDataSet) -> ScatterResult<()> {
        self.core.append_data(raw)?;
        tracing::debug!(points = self.core.dataset.points.len(), "dataset extended");
        self.redraw()
    }

    /// Click handler: clears `selected`, highlights the nearest point (if
    /// any) and emits a hover notification for it, then redraws.
    ///
    /// No-op when click selection is disabled.
    pub fn on_click(&mut self, px: f64, py: f64) -> ScatterResult<()> {
        if !self.core.config.select_enabled {
            return Ok(());
        }

        if let Some(found) = self.core.click(px, py) {
            self.sink.on_hover(&found);
        }
        self.redraw()
    }

    /// Double-click is explicitly not a zoom trigger: the view must neither
    /// reset nor snap.
    pub fn on_double_click(&mut self) {}

    /// Pans the view by a pixel delta and redraws axes and points against
    /// the updated scales.
    pub fn on_pan(&mut self, dx_px: f64, dy_px: f64) -> ScatterResult<()> {
        self.core.pan(dx_px, dy_px)?;
        self.redraw()
    }

    /// Zooms per axis around an anchor pixel and redraws.
    pub fn on_wheel_zoom(
        &mut self,
        factor_x: f64,
        factor_y: f64,
        anchor_x_px: f64,
        anchor_y_px: f64,
    ) -> ScatterResult<()> {
        self.core.zoom(factor_x, factor_y, anchor_x_px, anchor_y_px)?;
        self.redraw()
    }

    /// Brush start: clears highlighting and toggles the nearest point in
    /// `selected`. No-op when brushing is disabled.
    pub fn on_brush_start(&mut self, px: f64, py: f64) -> ScatterResult<()> {
        if !self.core.config.brush_enabled {
            return Ok(());
        }

        self.core.brush_start(px, py);
        self.redraw()
    }

    /// Brush drag with the gesture's start and current pixel positions.
    pub fn on_brush_drag(
        &mut self,
        start_px: (f64, f64),
        current_px: (f64, f64),
    ) -> ScatterResult<()> {
        if !self.core.config.brush_enabled {
            return Ok(());
        }

        self.core.brush_drag(start_px, current_px);
        self.redraw()
    }

    /// Brush end: commits the selection to the sink and clears the visual
    /// extent.
    ///
    /// The commit is fire-and-forget: a persist failure is logged and the
    /// local selection state is kept as-is.
    pub fn on_brush_end(&mut self) -> ScatterResult<()> {
        if !self.core.config.brush_enabled {
            return Ok(());
        }

        let settings = self.core.brush_end();
        tracing::debug!(count = settings.selected.len(), "committing brush selection");
        self.sink.send_selection(&settings.selected);
        if let Err(error) = self.sink.persist_settings(&settings) {
            tracing::warn!(%error, "failed to persist selection settings");
        }
        self.redraw()
    }

    #[must_use]
    pub fn config(&self) -> ScatterEngineConfig {
        self.core.config
    }

    #[must_use]
    pub fn dataset(&self) -> &DataSet {
        &self.core.dataset
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.core.margins
    }

    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.core.transform
    }

    #[must_use]
    pub fn brush_extent(&self) -> Option<BrushExtent> {
        self.core.brush
    }

    /// Selected indices in selection order.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.core.selection.selected().iter().copied().collect()
    }

    #[must_use]
    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.core.selection.highlighted().iter().copied().collect()
    }

    /// Current plot-local pixel position of a point, if the index exists.
    #[must_use]
    pub fn pixel_position_of(&self, index: usize) -> Option<(f64, f64)> {
        let point = self.core.dataset.points.get(index)?;
        Some((
            self.core.x_view().to_pixel(point.x),
            self.core.y_view().to_pixel(point.y),
        ))
    }

    /// Maps a plot-local pixel position into data space under the current
    /// transform.
    #[must_use]
    pub fn map_pixel_to_data(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.core.x_view().to_data(px),
            self.core.y_view().to_data(py),
        )
    }

    /// Maps a data-space position onto plot-local pixels under the current
    /// transform.
    #[must_use]
    pub fn map_data_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.core.x_view().to_pixel(x),
            self.core.y_view().to_pixel(y),
        )
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
