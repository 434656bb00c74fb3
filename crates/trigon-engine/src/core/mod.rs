//! The per-frame protocol, independent of the windowing backend.
//!
//! The runtime forwards window events and redraw ticks here; this module
//! decides whether to draw and when the loop is over.

mod frame_loop;

pub use frame_loop::{FrameLoop, FrameStats, LoopControl, Present};
