//! scatter-rs: interactive scatter plot engine.
//!
//! This crate provides a Rust-idiomatic scatter plot core: linear scales with
//! padded domains, a pan/zoom view transform, click and brush selection, and a
//! deterministic render frame handed to pluggable backends.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ScatterEngine, ScatterEngineConfig};
pub use error::{ScatterError, ScatterResult};
