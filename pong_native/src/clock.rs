use std::time::{Duration, Instant};

use pong_core::platform::Clock;

/// Wall clock for frame pacing
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic_and_sleeps() {
        let mut clock = SystemClock::new();
        let before = clock.now_ms();
        clock.sleep_ms(5);
        assert!(clock.now_ms() >= before + 5);
    }
}
