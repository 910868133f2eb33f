use std::time::Duration;

use crate::time::{Clock, FrameConfig, FramePacer, Pacing, SystemClock, WaitStrategy};

use super::app::{FrameDriver, FrameOutcome, LoopState};

/// Counters collected while the loop runs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Frames cleared and presented.
    pub rendered: u64,
    /// Frames the surface refused.
    pub dropped: u64,
    /// Iterations that did no work because the frame budget was not used up.
    pub skipped: u64,
    /// Summed duration of all completed frames.
    pub busy: Duration,
}

impl FrameStats {
    /// Frames that ran to completion, presented or not.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.rendered + self.dropped
    }

    /// Mean duration of completed frames, `None` before the first one.
    pub fn average_frame_duration(&self) -> Option<Duration> {
        let frames = u32::try_from(self.frames()).ok()?;
        self.busy.checked_div(frames)
    }
}

/// Fixed-rate frame loop.
///
/// Each iteration either waits (budget not used up yet) or runs one frame:
/// poll events, stop if the close flag is set, otherwise render. Closing is
/// observed on the same iteration as the poll that delivered it, and no frame
/// is rendered after that.
pub struct FrameLoop<C: Clock = SystemClock> {
    clock: C,
    pacer: FramePacer,
    wait: WaitStrategy,
    state: LoopState,
    stats: FrameStats,
}

impl FrameLoop<SystemClock> {
    pub fn new(config: FrameConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> FrameLoop<C> {
    pub fn with_clock(config: FrameConfig, clock: C) -> Self {
        Self {
            clock,
            pacer: FramePacer::new(config.target_frame_duration),
            wait: config.wait,
            state: LoopState::Running,
            stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Runs until the loop exits and returns the collected counters.
    pub fn run<D: FrameDriver + ?Sized>(&mut self, driver: &mut D) -> FrameStats {
        log::info!(
            "frame loop started (target {:?}, {:?} wait)",
            self.pacer.target(),
            self.wait
        );

        while self.step(driver) == LoopState::Running {}

        match self.stats.average_frame_duration() {
            Some(avg) => log::info!(
                "frame loop finished: {} frames rendered, {} dropped, average {:.2}ms",
                self.stats.rendered,
                self.stats.dropped,
                avg.as_secs_f64() * 1000.0
            ),
            None => log::info!("frame loop finished before the first frame"),
        }
        log::debug!("{} idle iterations skipped", self.stats.skipped);

        self.stats
    }

    /// Performs a single iteration.
    pub fn step<D: FrameDriver + ?Sized>(&mut self, driver: &mut D) -> LoopState {
        if self.state == LoopState::Exiting {
            return LoopState::Exiting;
        }

        let now = self.clock.now();
        if let Pacing::Skip { remaining } = self.pacer.check(now) {
            self.stats.skipped += 1;
            match self.wait {
                WaitStrategy::Spin => self.clock.spin(),
                WaitStrategy::Sleep => self.clock.sleep(remaining.min(self.pacer.target())),
            }
            return LoopState::Running;
        }

        let frame_start = now;
        driver.poll_events();
        if driver.should_close() {
            log::info!("close requested");
            return self.exit();
        }

        match driver.render_frame() {
            FrameOutcome::Presented => self.stats.rendered += 1,
            FrameOutcome::Dropped => {
                log::trace!("frame dropped by the surface");
                self.stats.dropped += 1;
            }
            FrameOutcome::Fatal => {
                log::error!("rendering failed, leaving the frame loop");
                return self.exit();
            }
        }

        let frame_end = self.clock.now();
        let duration = self.pacer.record_frame(frame_start, frame_end);
        self.stats.busy += duration;

        log::debug!("frame {} duration {}ms", self.stats.frames(), duration.as_millis());

        LoopState::Running
    }

    fn exit(&mut self) -> LoopState {
        self.state = LoopState::Exiting;
        LoopState::Exiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Records calls and simulates work by advancing a shared manual clock.
    struct FakeDriver<'c> {
        clock: &'c ManualClock,
        poll_cost: Duration,
        render_cost: Duration,
        /// Close flag becomes set during the poll with this (1-based) index.
        close_on_poll: Option<u64>,
        outcomes: Vec<FrameOutcome>,
        closed: bool,
        polls: u64,
        renders: u64,
    }

    impl<'c> FakeDriver<'c> {
        fn new(clock: &'c ManualClock) -> Self {
            Self {
                clock,
                poll_cost: Duration::ZERO,
                render_cost: Duration::ZERO,
                close_on_poll: None,
                outcomes: Vec::new(),
                closed: false,
                polls: 0,
                renders: 0,
            }
        }
    }

    impl FrameDriver for FakeDriver<'_> {
        fn poll_events(&mut self) {
            self.polls += 1;
            self.clock.advance(self.poll_cost);
            if self.close_on_poll == Some(self.polls) {
                self.closed = true;
            }
        }

        fn should_close(&self) -> bool {
            self.closed
        }

        fn render_frame(&mut self) -> FrameOutcome {
            self.renders += 1;
            self.clock.advance(self.render_cost);
            if self.outcomes.is_empty() {
                FrameOutcome::Presented
            } else {
                self.outcomes.remove(0)
            }
        }
    }

    fn frame_loop(clock: &ManualClock, wait: WaitStrategy) -> FrameLoop<&ManualClock> {
        FrameLoop::with_clock(
            FrameConfig::default()
                .with_target_frame_duration(ms(16))
                .with_wait(wait),
            clock,
        )
    }

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn first_iteration_renders_immediately() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        assert_eq!(lp.step(&mut driver), LoopState::Running);
        assert_eq!(driver.polls, 1);
        assert_eq!(driver.renders, 1);
        assert_eq!(lp.stats().rendered, 1);
    }

    #[test]
    fn skipped_iterations_do_no_work() {
        let clock = ManualClock::with_spin_step(ms(1));
        let mut driver = FakeDriver::new(&clock);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        lp.step(&mut driver);
        // Zero-cost frame: 16ms to wait, one millisecond per spin.
        for _ in 0..16 {
            lp.step(&mut driver);
            assert_eq!(driver.polls, 1);
            assert_eq!(driver.renders, 1);
        }
        assert_eq!(lp.stats().skipped, 16);

        lp.step(&mut driver);
        assert_eq!(driver.polls, 2);
        assert_eq!(driver.renders, 2);
    }

    #[test]
    fn frames_start_one_target_apart() {
        let clock = ManualClock::with_spin_step(Duration::from_micros(100));
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(4);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        let t0 = clock.now();
        lp.step(&mut driver);
        let first_end = lp.pacer().last_update().unwrap();
        assert_eq!(first_end - t0, ms(4));

        while driver.renders < 2 {
            lp.step(&mut driver);
        }
        let second_end = lp.pacer().last_update().unwrap();
        assert_eq!(second_end - first_end, ms(16));
    }

    #[test]
    fn over_budget_frames_are_never_throttled() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(20);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        for _ in 0..5 {
            lp.step(&mut driver);
        }
        assert_eq!(driver.renders, 5);
        assert_eq!(lp.stats().skipped, 0);
        assert_eq!(lp.pacer().last_frame_duration(), ms(20));
    }

    #[test]
    fn sleep_strategy_waits_out_remaining_budget_once() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(6);
        let mut lp = frame_loop(&clock, WaitStrategy::Sleep);

        lp.step(&mut driver);
        let end = clock.now();

        lp.step(&mut driver);
        assert_eq!(lp.stats().skipped, 1);
        assert_eq!(clock.now() - end, ms(10));

        lp.step(&mut driver);
        assert_eq!(driver.renders, 2);
    }

    // ── exit ──────────────────────────────────────────────────────────────

    #[test]
    fn close_during_poll_exits_without_rendering() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(20);
        driver.close_on_poll = Some(3);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        assert_eq!(lp.step(&mut driver), LoopState::Running);
        assert_eq!(lp.step(&mut driver), LoopState::Running);
        assert_eq!(lp.step(&mut driver), LoopState::Exiting);

        assert_eq!(driver.polls, 3);
        assert_eq!(driver.renders, 2);
        assert_eq!(lp.state(), LoopState::Exiting);
    }

    #[test]
    fn no_work_after_exiting() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.close_on_poll = Some(1);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        assert_eq!(lp.step(&mut driver), LoopState::Exiting);
        for _ in 0..3 {
            assert_eq!(lp.step(&mut driver), LoopState::Exiting);
        }
        assert_eq!(driver.polls, 1);
        assert_eq!(driver.renders, 0);
    }

    #[test]
    fn run_returns_stats_after_close() {
        let clock = ManualClock::with_spin_step(ms(1));
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(2);
        driver.close_on_poll = Some(4);
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        let stats = lp.run(&mut driver);
        assert_eq!(stats.rendered, 3);
        assert_eq!(stats.busy, ms(6));
        assert_eq!(stats.average_frame_duration(), Some(ms(2)));
        assert_eq!(driver.renders, 3);
    }

    #[test]
    fn dropped_frames_keep_running() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.render_cost = ms(20);
        driver.outcomes = vec![FrameOutcome::Dropped, FrameOutcome::Presented];
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        lp.step(&mut driver);
        lp.step(&mut driver);
        assert_eq!(lp.state(), LoopState::Running);
        assert_eq!(lp.stats().dropped, 1);
        assert_eq!(lp.stats().rendered, 1);
        assert_eq!(lp.stats().frames(), 2);
    }

    #[test]
    fn fatal_render_exits() {
        let clock = ManualClock::new();
        let mut driver = FakeDriver::new(&clock);
        driver.outcomes = vec![FrameOutcome::Fatal];
        let mut lp = frame_loop(&clock, WaitStrategy::Spin);

        assert_eq!(lp.step(&mut driver), LoopState::Exiting);
        assert_eq!(lp.stats().rendered, 0);
        assert_eq!(lp.step(&mut driver), LoopState::Exiting);
        assert_eq!(driver.renders, 1);
    }

    #[test]
    fn average_is_none_without_frames() {
        assert_eq!(FrameStats::default().average_frame_duration(), None);
    }
}
