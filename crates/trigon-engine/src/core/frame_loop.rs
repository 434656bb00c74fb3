use winit::event::WindowEvent;

use crate::device::{GlApi, PresentError};
use crate::render::TrianglePipeline;
use crate::time::FrameClock;

/// Something that can show the frame just rendered (a buffer swap).
pub trait Present {
    fn present(&self) -> Result<(), PresentError>;
}

/// Directive returned to the runtime after each event or frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Counters kept across the run.
///
/// `frames_drawn == frames_presented` after every successful frame; they only
/// diverge when a present fails, which ends the loop.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct FrameStats {
    pub frames_drawn: u64,
    pub frames_presented: u64,
}

/// Draw → present loop state with a single exit condition: a close request.
#[derive(Debug, Default)]
pub struct FrameLoop {
    clock: FrameClock,
    stats: FrameStats,
    close_requested: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn is_closed(&self) -> bool {
        self.close_requested
    }

    /// Marks the loop closed because the user asked for it. No frame is drawn afterwards.
    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("close requested after {} frames", self.stats.frames_presented);
        }
        self.close_requested = true;
    }

    /// Ends the loop after a fatal error; the caller reports the error itself.
    pub fn abort(&mut self) {
        self.close_requested = true;
    }

    /// Observes a polled window event. Only `CloseRequested` matters.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> LoopControl {
        if matches!(event, WindowEvent::CloseRequested) {
            self.request_close();
        }
        self.control()
    }

    /// Runs one iteration: one draw, then one present.
    pub fn run_frame<G, P>(
        &mut self,
        gl: &G,
        pipeline: &TrianglePipeline<G>,
        target: &P,
    ) -> Result<LoopControl, PresentError>
    where
        G: GlApi,
        P: Present,
    {
        if self.close_requested {
            return Ok(LoopControl::Exit);
        }

        pipeline.draw(gl);
        self.stats.frames_drawn += 1;

        target.present()?;
        self.stats.frames_presented += 1;

        if let Some(fps) = self.clock.tick() {
            log::debug!("{fps:.1} fps ({} frames)", self.clock.frames());
        }

        Ok(LoopControl::Continue)
    }

    fn control(&self) -> LoopControl {
        if self.close_requested {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }
}
