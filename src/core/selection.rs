use indexmap::IndexSet;
use ordered_float::OrderedFloat;

use crate::core::transform::TransformedScale;
use crate::core::types::ScatterPoint;

/// Click/hover and brush selection sets keyed by stable point index.
///
/// `highlighted` drives hover emphasis (darkened fill), `selected` drives the
/// member/non-member alpha rule and is what gets committed to the host.
/// Insertion order of `selected` is preserved because the commit payload
/// reports coordinates in selection order.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    highlighted: IndexSet<usize>,
    selected: IndexSet<usize>,
}

impl SelectionState {
    #[must_use]
    pub fn highlighted(&self) -> &IndexSet<usize> {
        &self.highlighted
    }

    #[must_use]
    pub fn selected(&self) -> &IndexSet<usize> {
        &self.selected
    }

    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Replaces the highlight set with a single index.
    pub fn highlight_only(&mut self, index: usize) {
        self.highlighted.clear();
        self.highlighted.insert(index);
    }

    pub fn clear_highlighted(&mut self) {
        self.highlighted.clear();
    }

    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Adds the index if absent, removes it if present.
    ///
    /// Returns `true` when the index is selected after the call.
    pub fn toggle_selected(&mut self, index: usize) -> bool {
        if self.selected.shift_remove(&index) {
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    /// Replaces the selected set, preserving iteration order of the input.
    pub fn replace_selected(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.selected.clear();
        self.selected.extend(indices);
    }
}

/// Finds the point whose transformed screen position is closest to `pixel`.
///
/// There is no maximum pick distance: the globally nearest point wins even
/// when the pointer is far from every point. Points whose projected position
/// is not finite are skipped.
#[must_use]
pub fn nearest_point<'a>(
    points: &'a [ScatterPoint],
    pixel: (f64, f64),
    x_scale: TransformedScale,
    y_scale: TransformedScale,
) -> Option<&'a ScatterPoint> {
    points
        .iter()
        .filter_map(|point| {
            let dx = x_scale.to_pixel(point.x) - pixel.0;
            let dy = y_scale.to_pixel(point.y) - pixel.1;
            let distance_sq = dx * dx + dy * dy;
            distance_sq
                .is_finite()
                .then_some((point, OrderedFloat(distance_sq)))
        })
        .min_by_key(|(_, distance_sq)| *distance_sq)
        .map(|(point, _)| point)
}
