//! Trigon engine crate.
//!
//! Opens one window with an OpenGL 3.3 core context and draws a static white
//! triangle every frame until the window is closed.

pub mod core;
pub mod device;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;
