mod axis;
mod config;
mod engine;
mod engine_core;
mod frame_builder;
mod sink;

pub use config::ScatterEngineConfig;
pub use engine::ScatterEngine;
pub use sink::{NullSink, SelectionSettings, SelectionSink};
