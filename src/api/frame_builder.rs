use crate::error::{ScatterError, ScatterResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis::{
    AXIS_LABEL_COLOR, AXIS_LABEL_FONT_PX, AXIS_LINE_COLOR, AXIS_TICK_MARK_LEN_PX,
    AXIS_TICK_TARGET_COUNT, AXIS_TITLE_FONT_PX, BRUSH_FILL_COLOR, GRID_LINE_COLOR, format_tick,
    nice_ticks, tick_step,
};
use super::engine_core::EngineCore;

/// Alpha applied to selection members while a brush selection is active.
const SELECTED_ALPHA: f64 = 0.9;
/// Alpha applied to non-members while a brush selection is active.
const DESELECTED_ALPHA: f64 = 0.1;
/// Darkening factor for highlighted fills.
const HIGHLIGHT_DARKEN: f64 = 0.75;
/// Cosmetic density heuristic: thinner point strokes on large datasets.
const DENSE_POINT_COUNT: usize = 500;

/// Materializes the whole scene from current engine state.
///
/// The frame is a pure function of (dataset, scales, transform, selection,
/// brush): identical state yields an equal frame. Draw order is axes and
/// gridlines first, points in dataset insertion order, brush extent on top.
pub(super) fn build_frame(core: &EngineCore) -> ScatterResult<RenderFrame> {
    let viewport = core.config.viewport;
    if !viewport.is_valid() {
        return Err(ScatterError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let margins = core.margins;
    let plot_w = margins.plot_width(viewport);
    let plot_h = margins.plot_height(viewport);
    let left = margins.left;
    let top = margins.top;
    let right_px = left + plot_w;
    let bottom_px = top + plot_h;

    let x_view = core.x_view();
    let y_view = core.y_view();

    let mut frame = RenderFrame::new(viewport);

    // Axis overlay regenerates from the current transformed scales.
    let x_domain = x_view.visible_domain(0.0, plot_w);
    let x_step = tick_step((x_domain.1 - x_domain.0).abs(), AXIS_TICK_TARGET_COUNT);
    for &tick in &nice_ticks(x_domain, AXIS_TICK_TARGET_COUNT) {
        let px = left + x_view.to_pixel(tick);
        if !px.is_finite() || px < left - 0.5 || px > right_px + 0.5 {
            continue;
        }
        frame.push_line(LinePrimitive::new(px, top, px, bottom_px, 1.0, GRID_LINE_COLOR));
        frame.push_line(LinePrimitive::new(
            px,
            bottom_px,
            px,
            bottom_px + AXIS_TICK_MARK_LEN_PX,
            1.0,
            AXIS_LINE_COLOR,
        ));
        frame.push_text(TextPrimitive::new(
            format_tick(tick, x_step),
            px,
            bottom_px + 16.0,
            AXIS_LABEL_FONT_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
    }

    let y_domain = y_view.visible_domain(plot_h, 0.0);
    let y_step = tick_step((y_domain.1 - y_domain.0).abs(), AXIS_TICK_TARGET_COUNT);
    for &tick in &nice_ticks(y_domain, AXIS_TICK_TARGET_COUNT) {
        let py = top + y_view.to_pixel(tick);
        if !py.is_finite() || py < top - 0.5 || py > bottom_px + 0.5 {
            continue;
        }
        frame.push_line(LinePrimitive::new(left, py, right_px, py, 1.0, GRID_LINE_COLOR));
        frame.push_line(LinePrimitive::new(
            left - AXIS_TICK_MARK_LEN_PX,
            py,
            left,
            py,
            1.0,
            AXIS_LINE_COLOR,
        ));
        frame.push_text(TextPrimitive::new(
            format_tick(tick, y_step),
            left - 8.0,
            py + 4.0,
            AXIS_LABEL_FONT_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Right,
        ));
    }

    frame.push_line(LinePrimitive::new(
        left,
        bottom_px,
        right_px,
        bottom_px,
        1.0,
        AXIS_LINE_COLOR,
    ));
    frame.push_line(LinePrimitive::new(left, top, left, bottom_px, 1.0, AXIS_LINE_COLOR));

    // Points draw in insertion order so later points overwrite earlier ones.
    let selection_active = !core.selection.selected().is_empty();
    let stroke_width = if core.dataset.points.len() > DENSE_POINT_COUNT {
        1.0
    } else {
        1.1
    };
    for point in &core.dataset.points {
        let cx = left + x_view.to_pixel(point.x);
        let cy = top + y_view.to_pixel(point.y);
        if !cx.is_finite() || !cy.is_finite() {
            continue;
        }

        let alpha = if selection_active {
            if core.selection.is_selected(point.index) {
                SELECTED_ALPHA
            } else {
                DESELECTED_ALPHA
            }
        } else {
            point.alpha
        };
        let fill = if core.selection.is_highlighted(point.index) {
            point.fill.darker(HIGHLIGHT_DARKEN)
        } else {
            point.fill
        };

        frame.push_circle(CirclePrimitive::new(
            cx,
            cy,
            point.radius,
            stroke_width,
            fill.with_alpha(alpha),
            point.stroke.with_alpha(alpha),
        ));
    }

    // Static titles, placed relative to margins.
    if let Some(title) = &core.dataset.x_title {
        frame.push_text(TextPrimitive::new(
            title.clone(),
            left + plot_w / 2.0,
            f64::from(viewport.height) - 10.0,
            AXIS_TITLE_FONT_PX,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
    }
    if let Some(title) = &core.dataset.y_title {
        frame.push_text(
            TextPrimitive::new(
                title.clone(),
                20.0,
                top + plot_h / 2.0,
                AXIS_TITLE_FONT_PX,
                AXIS_LABEL_COLOR,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }

    // Brush extent, topmost while a drag is in progress.
    if let Some(extent) = core.brush.filter(|extent| !extent.is_empty()) {
        let (x_min, x_max) = extent.x_bounds();
        let (y_min, y_max) = extent.y_bounds();
        let px0 = left + x_view.to_pixel(x_min);
        let px1 = left + x_view.to_pixel(x_max);
        let py0 = top + y_view.to_pixel(y_min);
        let py1 = top + y_view.to_pixel(y_max);
        if px0.is_finite() && px1.is_finite() && py0.is_finite() && py1.is_finite() {
            frame.push_rect(RectPrimitive::new(
                px0.min(px1),
                py0.min(py1),
                (px1 - px0).abs(),
                (py1 - py0).abs(),
                BRUSH_FILL_COLOR,
            ));
        }
    }

    Ok(frame)
}
