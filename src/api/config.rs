use serde::{Deserialize, Serialize};

use crate::core::{Margins, StyleDefaults, Viewport};
use crate::error::{ScatterError, ScatterResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format. Brushing and click selection
/// default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_enabled")]
    pub brush_enabled: bool,
    #[serde(default = "default_enabled")]
    pub select_enabled: bool,
    #[serde(default)]
    pub styles: StyleDefaults,
    #[serde(default)]
    pub base_margins: Margins,
}

impl ScatterEngineConfig {
    /// Creates a config with default options, styles, and margins.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            brush_enabled: default_enabled(),
            select_enabled: default_enabled(),
            styles: StyleDefaults::default(),
            base_margins: Margins::default(),
        }
    }

    /// Enables or disables rectangular brush selection.
    #[must_use]
    pub fn with_brush_enabled(mut self, enabled: bool) -> Self {
        self.brush_enabled = enabled;
        self
    }

    /// Enables or disables click selection and hover.
    #[must_use]
    pub fn with_select_enabled(mut self, enabled: bool) -> Self {
        self.select_enabled = enabled;
        self
    }

    /// Sets default point appearance for records without explicit attributes.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleDefaults) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the base margins before axis-title adjustment.
    #[must_use]
    pub fn with_base_margins(mut self, margins: Margins) -> Self {
        self.base_margins = margins;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ScatterResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScatterError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ScatterResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScatterError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_enabled() -> bool {
    true
}
