//! Clock - timestamps and cooperative pacing
//!
//! The monitor never calls sleep or wall-clock APIs directly; it goes
//! through this trait so tests can drive the loop at full speed with
//! reproducible timestamps.

use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};

/// Time facilities the tick loop depends on
pub trait Clock {
    /// Wall-clock display timestamp, "HH:MM:SS"
    fn timestamp(&mut self) -> String;

    /// Best-effort suspension between ticks; not a scheduling guarantee
    fn pace(&mut self, interval: Duration);
}

// ============================================================================
// SYSTEM CLOCK
// ============================================================================

/// Real time and real sleep
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&mut self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn pace(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

// ============================================================================
// MANUAL CLOCK
// ============================================================================

/// Deterministic clock for tests: starts at a fixed time, advances only
/// when paced, never sleeps.
pub struct ManualClock {
    current_secs: u32,
    carry: Duration,
}

impl ManualClock {
    /// Clock starting at the given time of day
    pub fn starting_at(time: NaiveTime) -> Self {
        Self {
            current_secs: time.num_seconds_from_midnight(),
            carry: Duration::ZERO,
        }
    }

    /// Clock starting at midnight
    pub fn at_midnight() -> Self {
        Self {
            current_secs: 0,
            carry: Duration::ZERO,
        }
    }
}

impl Clock for ManualClock {
    fn timestamp(&mut self) -> String {
        let s = self.current_secs % 86_400;
        format!("{:02}:{:02}:{:02}", s / 3600, (s / 60) % 60, s % 60)
    }

    fn pace(&mut self, interval: Duration) {
        // Sub-second paces accumulate so a 2 Hz loop still advances time.
        let total = self.carry + interval;
        self.current_secs = self.current_secs.wrapping_add(total.as_secs() as u32);
        self.carry = Duration::from_nanos(total.subsec_nanos() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_formats_midnight() {
        let mut clock = ManualClock::at_midnight();
        assert_eq!(clock.timestamp(), "00:00:00");
    }

    #[test]
    fn test_manual_clock_advances_on_pace() {
        let mut clock = ManualClock::at_midnight();
        clock.pace(Duration::from_secs(61));
        assert_eq!(clock.timestamp(), "00:01:01");
    }

    #[test]
    fn test_manual_clock_accumulates_subsecond_paces() {
        let mut clock = ManualClock::at_midnight();
        for _ in 0..4 {
            clock.pace(Duration::from_millis(500));
        }
        assert_eq!(clock.timestamp(), "00:00:02");
    }

    #[test]
    fn test_manual_clock_starting_at() {
        let start = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let mut clock = ManualClock::starting_at(start);
        assert_eq!(clock.timestamp(), "23:59:59");
        clock.pace(Duration::from_secs(2));
        assert_eq!(clock.timestamp(), "00:00:01");
    }

    #[test]
    fn test_system_clock_format_shape() {
        let mut clock = SystemClock;
        let ts = clock.timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }
}
