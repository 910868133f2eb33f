use std::time::{Duration, Instant};

/// Frame budget used when nothing else is configured (roughly 60 Hz).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(16);

/// How the loop waits out the rest of a frame budget.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WaitStrategy {
    /// Re-check the clock immediately. Sub-millisecond precision, keeps one
    /// core busy for the whole wait.
    #[default]
    Spin,
    /// Sleep for the remaining wait, capped at one frame budget. Frees the
    /// core at the cost of scheduler granularity.
    Sleep,
}

/// Frame pacing configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameConfig {
    pub target_frame_duration: Duration,
    pub wait: WaitStrategy,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_frame_duration: DEFAULT_FRAME_DURATION,
            wait: WaitStrategy::Spin,
        }
    }
}

impl FrameConfig {
    pub fn with_target_frame_duration(mut self, target: Duration) -> Self {
        self.target_frame_duration = target;
        self
    }

    /// Sets the target from a rate in frames per second. Zero is ignored.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        if fps > 0 {
            self.target_frame_duration = Duration::from_secs(1) / fps;
        }
        self
    }

    pub fn with_wait(mut self, wait: WaitStrategy) -> Self {
        self.wait = wait;
        self
    }
}

/// Result of a pacing check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pacing {
    /// Not enough time has passed since the last frame; do no work.
    Skip { remaining: Duration },
    /// Run a frame now.
    Proceed,
}

impl Pacing {
    #[inline]
    pub fn should_skip(self) -> bool {
        matches!(self, Pacing::Skip { .. })
    }
}

/// `target - last_frame - waited`, saturating at zero.
///
/// Zero means the frame is already over budget and must not be throttled.
#[inline]
pub fn time_to_wait(target: Duration, last_frame: Duration, waited: Duration) -> Duration {
    target.saturating_sub(last_frame).saturating_sub(waited)
}

/// Fixed-rate pacing state.
///
/// Holds the end of the last completed frame and how long that frame took.
/// A frame may start once `target - last_frame_duration` has elapsed since the
/// previous frame ended, which keeps frame starts one target apart.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    last_frame_duration: Duration,
    last_update: Option<Instant>,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            last_frame_duration: Duration::ZERO,
            last_update: None,
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn last_frame_duration(&self) -> Duration {
        self.last_frame_duration
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Decides whether an iteration starting at `now` should do work.
    ///
    /// Nothing has been rendered before the first frame, so it always proceeds.
    pub fn check(&self, now: Instant) -> Pacing {
        // Elapsed time since `last_update` already covers any waiting done in
        // this cycle.
        let wait = time_to_wait(self.target, self.last_frame_duration, Duration::ZERO);
        if wait.is_zero() {
            return Pacing::Proceed;
        }

        let Some(last_update) = self.last_update else {
            return Pacing::Proceed;
        };

        let elapsed = now.saturating_duration_since(last_update);
        if elapsed < wait {
            Pacing::Skip {
                remaining: wait - elapsed,
            }
        } else {
            Pacing::Proceed
        }
    }

    /// Records a completed frame and returns its duration.
    pub fn record_frame(&mut self, frame_start: Instant, frame_end: Instant) -> Duration {
        let duration = frame_end.saturating_duration_since(frame_start);
        self.last_update = Some(frame_end);
        self.last_frame_duration = duration;
        duration
    }
}
