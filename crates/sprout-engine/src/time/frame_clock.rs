use std::time::{Duration, Instant};

/// Tick-rate ceiling used by the runtime loop.
pub const DEFAULT_MAX_RATE: u32 = 1000;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Delta time in seconds: whole elapsed milliseconds divided by 1000.
    pub dt: f32,

    /// Precise time since the previous tick.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock with a maximum tick rate.
///
/// `tick()` sleeps until at least `1 / max_rate` seconds have passed since the
/// previous tick, so the loop never spins faster than the ceiling. The wait
/// only bounds idle CPU use; no frame is ever dropped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    min_interval: Duration,
}

impl FrameClock {
    /// Creates a clock capped at [`DEFAULT_MAX_RATE`] ticks per second.
    pub fn new() -> Self {
        Self::with_max_rate(DEFAULT_MAX_RATE)
    }

    /// Creates a clock capped at `max_rate` ticks per second.
    ///
    /// `0` disables the cap.
    pub fn with_max_rate(max_rate: u32) -> Self {
        let min_interval = if max_rate == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / max_rate as u64)
        };

        Self {
            last: Instant::now(),
            frame_index: 0,
            min_interval,
        }
    }

    /// Minimum spacing between two ticks.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Resets the baseline so the next delta is measured from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// How long a tick taken at `now` would have to wait to respect the cap.
    pub fn remaining(&self, now: Instant) -> Duration {
        let next = self.last + self.min_interval;
        next.saturating_duration_since(now)
    }

    /// Waits out the rate cap, then advances the clock.
    pub fn tick(&mut self) -> FrameTime {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` without waiting.
    ///
    /// A `now` earlier than the previous tick yields a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.last);
        let dt = elapsed.as_millis() as f32 / 1000.0;

        self.last = self.last.max(now);

        let ft = FrameTime {
            dt,
            elapsed,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── delta time ────────────────────────────────────────────────────────

    #[test]
    fn dt_is_whole_milliseconds_over_1000() {
        let mut clock = FrameClock::new();
        let base = clock.last;

        let ft = clock.tick_at(base + Duration::from_micros(16_700));
        assert_eq!(ft.dt, 0.016);
        assert_eq!(ft.elapsed, Duration::from_micros(16_700));
    }

    #[test]
    fn dt_is_measured_from_previous_tick() {
        let mut clock = FrameClock::new();
        let base = clock.last;

        clock.tick_at(base + Duration::from_millis(10));
        let ft = clock.tick_at(base + Duration::from_millis(35));
        assert_eq!(ft.dt, 0.025);
    }

    #[test]
    fn dt_never_negative() {
        let mut clock = FrameClock::new();
        let base = clock.last;

        clock.tick_at(base + Duration::from_millis(50));
        let ft = clock.tick_at(base);
        assert_eq!(ft.dt, 0.0);
        assert!(ft.elapsed.is_zero());

        // The baseline did not move backwards.
        let ft = clock.tick_at(base + Duration::from_millis(60));
        assert_eq!(ft.dt, 0.010);
    }

    #[test]
    fn frame_index_increments() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        assert_eq!(clock.tick_at(base).frame_index, 0);
        assert_eq!(clock.tick_at(base).frame_index, 1);
        assert_eq!(clock.tick_at(base).frame_index, 2);
    }

    // ── rate cap ──────────────────────────────────────────────────────────

    #[test]
    fn default_cap_is_one_millisecond() {
        assert_eq!(FrameClock::new().min_interval(), Duration::from_millis(1));
    }

    #[test]
    fn zero_rate_disables_cap() {
        let clock = FrameClock::with_max_rate(0);
        assert_eq!(clock.remaining(clock.last), Duration::ZERO);
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let clock = FrameClock::with_max_rate(100);
        let base = clock.last;
        assert_eq!(clock.remaining(base), Duration::from_millis(10));
        assert_eq!(clock.remaining(base + Duration::from_millis(4)), Duration::from_millis(6));
        assert_eq!(clock.remaining(base + Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn tick_respects_ceiling() {
        let mut clock = FrameClock::with_max_rate(DEFAULT_MAX_RATE);
        clock.tick();

        let start = Instant::now();
        for _ in 0..20 {
            let ft = clock.tick();
            assert!(ft.elapsed >= Duration::from_millis(1));
        }
        assert!(start.elapsed() >= Duration::from_millis(19));
    }
}
