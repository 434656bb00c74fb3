//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and wires window events to the GL device,
//! the triangle pipeline and the frame loop.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
