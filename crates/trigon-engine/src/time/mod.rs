//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::FrameClock;
