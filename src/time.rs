//! Monotonic time for the animation clock
//!
//! Seconds elapsed since the first call in this process.

use std::sync::OnceLock;
use std::time::Instant;

pub fn now_seconds() -> f64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_monotonic() {
        let a = now_seconds();
        let b = now_seconds();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
