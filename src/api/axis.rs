use smallvec::SmallVec;

use crate::render::Color;

/// Target tick count per axis.
pub(super) const AXIS_TICK_TARGET_COUNT: usize = 5;

pub(super) const AXIS_TICK_MARK_LEN_PX: f64 = 6.0;
pub(super) const AXIS_LABEL_FONT_PX: f64 = 11.0;
pub(super) const AXIS_TITLE_FONT_PX: f64 = 12.0;

pub(super) const AXIS_LINE_COLOR: Color = Color::rgb(0.33, 0.33, 0.33);
pub(super) const AXIS_LABEL_COLOR: Color = Color::rgb(0.25, 0.25, 0.25);
pub(super) const GRID_LINE_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);
pub(super) const BRUSH_FILL_COLOR: Color = Color::rgba(0.3, 0.3, 0.3, 0.15);

pub(super) type TickBuffer = SmallVec<[f64; 8]>;

/// Rounds a raw interval to a 1/2/5 x 10^k step.
pub(super) fn tick_step(span: f64, target_count: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || target_count == 0 {
        return 0.0;
    }

    let raw = span / target_count as f64;
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual >= 50.0_f64.sqrt() {
        10.0
    } else if residual >= 10.0_f64.sqrt() {
        5.0
    } else if residual >= 2.0_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * magnitude
}

/// Tick values covering `domain` at round steps, in ascending order.
///
/// A degenerate (zero-width) domain yields a single tick at its value.
pub(super) fn nice_ticks(domain: (f64, f64), target_count: usize) -> TickBuffer {
    let (start, end) = (domain.0.min(domain.1), domain.0.max(domain.1));
    let mut ticks = TickBuffer::new();

    if !start.is_finite() || !end.is_finite() {
        return ticks;
    }

    let step = tick_step(end - start, target_count);
    if step == 0.0 {
        ticks.push(start);
        return ticks;
    }

    let mut index = (start / step).ceil() as i64;
    let tolerance = step * 1e-9;
    loop {
        let value = index as f64 * step;
        if value > end + tolerance {
            break;
        }
        ticks.push(value);
        index += 1;
    }

    ticks
}

/// Formats a tick value with just enough decimals for the step size.
pub(super) fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    let decimals = decimals.min(9);
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::{format_tick, nice_ticks, tick_step};

    #[test]
    fn tick_step_picks_round_intervals() {
        assert_eq!(tick_step(10.0, 5), 2.0);
        assert_eq!(tick_step(100.0, 5), 20.0);
        assert_eq!(tick_step(1.0, 5), 0.2);
        assert_eq!(tick_step(7.0, 5), 1.0);
    }

    #[test]
    fn nice_ticks_cover_the_domain_at_round_values() {
        let ticks = nice_ticks((0.0, 10.0), 5);
        assert_eq!(ticks.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let ticks = nice_ticks((-2.0, 22.0), 5);
        assert_eq!(ticks.as_slice(), &[0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn degenerate_domain_yields_single_tick() {
        let ticks = nice_ticks((4.0, 4.0), 5);
        assert_eq!(ticks.as_slice(), &[4.0]);
    }

    #[test]
    fn format_tick_tracks_step_precision() {
        assert_eq!(format_tick(4.0, 2.0), "4");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(0.45, 0.05), "0.45");
    }
}
