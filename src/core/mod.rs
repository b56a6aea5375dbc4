pub mod brush;
pub mod data;
pub mod scale;
pub mod selection;
pub mod transform;
pub mod types;

pub use brush::BrushExtent;
pub use data::{AxisTitle, RawDataSet, StyleDefaults, bind_dataset, bind_points};
pub use scale::{DOMAIN_PADDING_RATIO, LinearScale, compute_scales};
pub use selection::{SelectionState, nearest_point};
pub use transform::{TransformedScale, ViewTransform};
pub use types::{DataSet, Margins, ScatterPoint, Viewport};
