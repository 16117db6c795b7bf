//! Pausable countdown backing toast auto-dismissal.
//!
//! Pure arithmetic over caller-supplied timestamps (milliseconds), so the
//! DOM side only has to feed it `js_sys::Date::now()`.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining_ms: f64,
    resumed_at: Option<f64>,
}

impl Countdown {
    /// A running countdown of `duration_ms` started at `now`.
    pub fn start(duration_ms: f64, now: f64) -> Self {
        Self {
            remaining_ms: duration_ms.max(0.0),
            resumed_at: Some(now),
        }
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    /// Time left at `now`, never negative.
    pub fn remaining(&self, now: f64) -> f64 {
        match self.resumed_at {
            Some(at) => (self.remaining_ms - (now - at).max(0.0)).max(0.0),
            None => self.remaining_ms,
        }
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0.0
    }

    /// Freeze the countdown. Returns false if it was already paused.
    pub fn pause(&mut self, now: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining_ms = self.remaining(now);
        self.resumed_at = None;
        true
    }

    /// Continue a paused countdown. Returns false if it was already running.
    pub fn resume(&mut self, now: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.resumed_at = Some(now);
        true
    }
}
