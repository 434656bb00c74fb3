//! The triangle renderer.
//!
//! Owns the fixed geometry, the inline shaders and the GL objects built from
//! them. Commands go through [`crate::device::GlApi`].
//!
//! Convention:
//! - positions are already in normalized device coordinates
//! - nothing is rebound after setup; each frame is one draw call

mod shader;
mod triangle;
mod vertex;

pub use shader::{FRAGMENT_SHADER, POSITION_ATTRIBUTE, VERTEX_SHADER};
pub use triangle::TrianglePipeline;
pub use vertex::{AttributeLayout, Vertex, POSITION_LAYOUT, TRIANGLE_VERTICES};
