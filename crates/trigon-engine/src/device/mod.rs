//! Window, GL context and the GL command surface.
//!
//! This module is responsible for:
//! - creating the window and a current OpenGL core-profile context
//! - loading GL entry points
//! - presenting frames (buffer swap)
//! - the [`GlApi`] seam the renderer issues commands through

mod api;
mod error;
mod gpu;
mod init;

#[cfg(test)]
pub(crate) mod recording;

pub use api::{GlApi, ShaderStage};
pub use error::{BootstrapError, PresentError};
pub use gpu::Gpu;
pub use init::GpuInit;
