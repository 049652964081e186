use std::time::{Duration, Instant};

/// Injectable source of "now", so the one-second timer cadence can be driven
/// deterministically in tests rather than by sleeping on the wall clock.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Real wall-clock time, used outside of tests.
#[derive(Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock whose value only advances when told to, for tests that need to
/// cross the one-second timer threshold without actually waiting.
#[derive(Debug)]
pub struct VirtualClock {
    now: Instant,
}

impl VirtualClock {
    pub fn new() -> VirtualClock {
        VirtualClock { now: Instant::now() }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Default for VirtualClock {
    fn default() -> VirtualClock {
        VirtualClock::new()
    }
}

impl TimeSource for VirtualClock {
    fn now(&self) -> Instant {
        self.now
    }
}

/// Raises interrupt bit 0 once per second of elapsed time, gated on a
/// handler being installed at the timer's vector slot.
pub struct Timer {
    last_raise: Instant,
}

impl Timer {
    const INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(clock: &dyn TimeSource) -> Timer {
        Timer {
            last_raise: clock.now(),
        }
    }

    /// Returns `true` if a second has elapsed since the last raise and the
    /// caller should set IS bit 0; in that case the internal clock resets.
    pub fn poll(&mut self, clock: &dyn TimeSource, vector_installed: bool) -> bool {
        if !vector_installed {
            return false;
        }
        let now = clock.now();
        if now.duration_since(self.last_raise) >= Timer::INTERVAL {
            self.last_raise = now;
            true
        } else {
            false
        }
    }
}
