// THEORY:
// This file is the main entry point for the `ball_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like an effect renderer or a
// tracker stage).
//
// The primary goal is to export the `CirclePipeline` and its associated data
// structures (`PipelineConfig`, `ObjectDetails`, `ConvexHull`, etc.) as the
// clean, high-level interface for the classification stage. The internal
// modules (`core_modules`) are encapsulated behind it, providing a clean
// separation between the circularity-scoring logic and its callers.

pub mod core_modules;
pub mod pipeline;
