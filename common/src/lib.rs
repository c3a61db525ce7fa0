//! Common utilities for the cyclotron visualization
//!
//! This crate provides the shared graphics setup and 2D camera used by the
//! simulation binary: window creation, wgpu surface/device bootstrap, and an
//! orthographic camera that pins a fixed meter-to-pixel scale.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
