// THEORY:
// This file is the main entry point for the `delta_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers.
//
// The primary goal is to export the two operations of the engine — the motion
// detector (`motion`, `motion_with_step`) and the mask blender (`blended`) —
// together with the configured `MotionPipeline` front end. The internal
// modules (`core_modules`) are exported for advanced consumers but the
// re-exports below are the intended surface.

pub mod blender;
pub mod core_modules;
pub mod detector;
pub mod pipeline;

// Re-export the public API at the crate root.
pub use blender::blended;
pub use core_modules::pixel::pixel::{Brightness, Pixel};
pub use core_modules::smart_pixel::smart_pixel::BrightnessDelta;
pub use detector::{motion, motion_with_step};
pub use pipeline::{MotionConfig, MotionPipeline};
