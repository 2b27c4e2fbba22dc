use foundation::time::Time;

/// Frame metadata handed to per-frame callbacks.
///
/// `timestamp` is the monotonic clock reading from the frame driver;
/// `elapsed_ms` is measured from the first frame the clock saw, so the
/// animation starts at phase zero regardless of page age.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    pub timestamp: Time,
    pub elapsed_ms: f64,
}

/// Turns raw driver timestamps into [`Frame`]s.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    start: Option<Time>,
    next_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, timestamp: Time) -> Frame {
        let start = *self.start.get_or_insert(timestamp);
        let index = self.next_index;
        self.next_index = self.next_index.wrapping_add(1);
        Frame {
            index,
            timestamp,
            elapsed_ms: timestamp.since(start),
        }
    }

    pub fn started(&self) -> bool {
        self.start.is_some()
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.next_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::FrameClock;
    use foundation::time::Time;

    #[test]
    fn first_tick_is_time_zero() {
        let mut clock = FrameClock::new();
        let f0 = clock.tick(Time(5_000.0));
        assert_eq!(f0.index, 0);
        assert_eq!(f0.elapsed_ms, 0.0);
        let f1 = clock.tick(Time(5_016.0));
        assert_eq!(f1.index, 1);
        assert_eq!(f1.elapsed_ms, 16.0);
    }

    #[test]
    fn backwards_timestamps_clamp_to_zero() {
        let mut clock = FrameClock::new();
        clock.tick(Time(100.0));
        assert_eq!(clock.tick(Time(50.0)).elapsed_ms, 0.0);
    }

    #[test]
    fn reset_restarts_timebase() {
        let mut clock = FrameClock::new();
        clock.tick(Time(100.0));
        clock.reset();
        assert!(!clock.started());
        assert_eq!(clock.tick(Time(900.0)).elapsed_ms, 0.0);
    }
}
