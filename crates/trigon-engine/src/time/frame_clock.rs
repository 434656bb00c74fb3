use std::time::Instant;

/// Counts frames and reports the average rate over a fixed reporting window.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frames: u64,

    window_start: Instant,
    window_frames: u32,
    report_every: u32,
}

impl FrameClock {
    /// Frames per rate report when built via `Default`.
    pub const DEFAULT_REPORT_EVERY: u32 = 600;

    pub fn new(report_every: u32) -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            window_frames: 0,
            report_every: report_every.max(1),
        }
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances the clock by one frame.
    ///
    /// Once per reporting window, returns the average frame rate over that window.
    pub fn tick(&mut self) -> Option<f64> {
        self.frames = self.frames.wrapping_add(1);
        self.window_frames += 1;

        let mut rate = None;
        if self.window_frames >= self.report_every {
            let now = Instant::now();
            let secs = now.saturating_duration_since(self.window_start).as_secs_f64();
            if secs > 0.0 {
                rate = Some(f64::from(self.window_frames) / secs);
            }
            self.window_start = now;
            self.window_frames = 0;
        }

        rate
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REPORT_EVERY)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn counts_every_tick() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.frames(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn rate_reported_once_per_window() {
        let mut clock = FrameClock::new(3);

        let reports: Vec<bool> = (0..6)
            .map(|_| {
                std::thread::sleep(Duration::from_millis(1));
                clock.tick().is_some()
            })
            .collect();
        assert_eq!(reports, vec![false, false, true, false, false, true]);
    }
}
