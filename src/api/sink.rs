use serde::Serialize;

use crate::core::ScatterPoint;
use crate::error::ScatterResult;

/// Selection snapshot committed to the host on brush end.
///
/// `x`/`y` hold the coordinates of the selected points in `selected` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSettings {
    pub selected: Vec<usize>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// External collaborator receiving selection and hover notifications.
///
/// All methods default to no-ops so hosts implement only what they consume.
/// The engine treats every call as fire-and-forget: a `persist_settings`
/// error is logged and otherwise ignored, with no retry and no rollback of
/// local selection state.
pub trait SelectionSink {
    /// Messaging-channel style notification with the selected indices.
    fn send_selection(&mut self, _selected: &[usize]) {}

    /// Persists the selection snapshot to a backing store.
    fn persist_settings(&mut self, _settings: &SelectionSettings) -> ScatterResult<()> {
        Ok(())
    }

    /// Fired when a click resolves to a point.
    fn on_hover(&mut self, _point: &ScatterPoint) {}
}

/// Sink that discards every notification, for headless engine usage.
#[derive(Debug, Default)]
pub struct NullSink;

impl SelectionSink for NullSink {}
