//! Fixed-interval animation clock
//!
//! Decides when the next frame is due. Intervals missed while the UI was busy
//! are dropped rather than replayed, so a slow frame never causes a burst.

use tracing::trace;

/// Default delay between frames in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 200;

#[derive(Clone, Debug)]
pub struct Animation {
    interval: f64,
    paused: bool,
    next_due: Option<f64>,
    ticks: u64,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl Animation {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: interval_ms as f64 / 1000.0,
            paused: false,
            next_due: None,
            ticks: 0,
        }
    }

    /// Interval in seconds
    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume; the next tick is due immediately
    pub fn resume(&mut self) {
        self.paused = false;
        self.next_due = None;
    }

    pub fn toggle(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Returns true when a new frame should be drawn at time `now` (seconds).
    /// The first tick is always due.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.paused {
            return false;
        }
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) => {
                // Skip whole intervals that were missed
                let missed = ((now - due) / self.interval.max(f64::EPSILON)).floor();
                self.next_due = Some(due + (missed + 1.0) * self.interval);
                self.ticks += 1;
                trace!(now, missed, "Frame due");
                true
            }
            None => {
                self.next_due = Some(now + self.interval);
                self.ticks += 1;
                true
            }
        }
    }

    /// Time until the next frame, for scheduling repaints
    pub fn until_next(&self, now: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        Some(self.next_due.map_or(0.0, |due| (due - now).max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_due() {
        let mut anim = Animation::new(100);
        assert!(anim.tick(5.0));
        assert!(!anim.tick(5.05));
        assert!(anim.tick(5.12));
        assert_eq!(anim.ticks(), 2);
    }

    #[test]
    fn test_missed_intervals_are_dropped() {
        let mut anim = Animation::new(100);
        assert!(anim.tick(0.0));
        // a long stall: only one frame, schedule moves past now
        assert!(anim.tick(1.05));
        assert!(!anim.tick(1.06));
        assert!(anim.tick(1.15));
        assert_eq!(anim.ticks(), 3);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut anim = Animation::new(50);
        assert!(anim.tick(0.0));
        anim.pause();
        assert!(!anim.tick(10.0));
        assert_eq!(anim.until_next(10.0), None);
        anim.resume();
        assert!(anim.tick(10.01));
    }

    #[test]
    fn test_until_next() {
        let mut anim = Animation::new(200);
        assert_eq!(anim.until_next(0.0), Some(0.0));
        anim.tick(1.0);
        let wait = anim.until_next(1.05).unwrap();
        assert!((wait - 0.15).abs() < 1e-9);
    }
}
