#[cfg(test)]
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Time source used by the frame loop.
///
/// The loop never calls `Instant::now()` directly so pacing can be driven by a
/// manual clock in tests.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Called once per busy-poll iteration.
    fn spin(&self) {
        std::hint::spin_loop();
    }
}

/// Monotonic wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// `sleep` advances by the requested duration and `spin` by `spin_step`, so a
/// waiting loop makes progress without real time passing.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ManualClock {
    now: Cell<Instant>,
    spin_step: Duration,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self::with_spin_step(Duration::from_millis(1))
    }

    pub fn with_spin_step(spin_step: Duration) -> Self {
        Self {
            now: Cell::new(Instant::now()),
            spin_step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }

    fn spin(&self) {
        self.advance(self.spin_step);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }

    fn spin(&self) {
        (**self).spin()
    }
}
