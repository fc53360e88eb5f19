//! wire3d core library - software wire-frame 3D rendering
//!
//! A CPU-only pipeline that turns a hierarchical scene graph of transformed
//! wire-frame models into pixels: scene traversal with an accumulated CTM,
//! view and camera transforms, projection, line clipping against the
//! canonical view rectangle, and sub-pixel line rasterization into a
//! caller-supplied pixel sink.

pub mod clip;
pub mod color;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use error::RenderError;
pub use framebuffer::{FrameBuffer, PixelSink};
pub use geometry::{LineSegment, Model, SharedModel, Vertex};
pub use pipeline::{render, RenderOptions};
pub use projection::Camera;
pub use scene::{Position, Scene, SharedPosition};
pub use transform::Transform;
