//! Frame-driven timers
//!
//! Both timers are advanced with the wall-clock delta of each frame. A timer
//! has a single handle: arming it always discards whatever was pending.

/// Repeating timer (drives the pipe spawner)
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl PeriodicTimer {
    /// Create a disarmed timer
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Restart the period from zero (cancels the previous arming)
    pub fn arm(&mut self) {
        self.elapsed = 0.0;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by `dt` seconds, returning how many periods completed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return 0;
        }
        let fired = (self.elapsed / self.interval).floor();
        self.elapsed %= self.interval;
        fired as u32
    }
}

/// One-shot countdown (drives the input debounce lock)
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    remaining: Option<f32>,
}

impl OneShotTimer {
    /// Start a countdown, replacing any pending one
    pub fn arm(&mut self, duration: f32) {
        self.remaining = Some(duration);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt` seconds; returns true on the frame the countdown expires
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) if left - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}
