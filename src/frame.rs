use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started (monotonic, absolute)
    pub time: f32,
    /// Seconds since the previous frame, never negative
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Frame clock. Yields one `FrameInfo` per rendered frame.
///
/// Use this in a loop: `for frame in clock { ... }`
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_number: 0,
            start_time: start,
            last_frame_time: start,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Produce the frame for `now`. Instants earlier than the last frame yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let delta = now.saturating_duration_since(self.last_frame_time).as_secs_f32();
        let time = now.saturating_duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = self.last_frame_time.max(now);

        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        Some(self.tick_at(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn frames_are_numbered_sequentially() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let first = clock.tick_at(start + Duration::from_millis(16));
        let second = clock.tick_at(start + Duration::from_millis(32));

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert_eq!(clock.frame_number(), 2);
    }

    #[test]
    fn time_is_absolute_and_delta_relative() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        clock.tick_at(start + Duration::from_millis(100));
        let frame = clock.tick_at(start + Duration::from_millis(150));

        assert!((frame.time - 0.15).abs() < 1e-4);
        assert!((frame.delta - 0.05).abs() < 1e-4);
    }

    #[test]
    fn delta_never_negative() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        clock.tick_at(start + Duration::from_millis(100));
        let frame = clock.tick_at(start + Duration::from_millis(50));

        assert_eq!(frame.delta, 0.0);
    }

    #[test]
    fn iterator_is_infinite() {
        let clock = FrameClock::new();
        let frames: Vec<_> = clock.take(3).collect();
        assert_eq!(frames.len(), 3);
        assert!(frames.windows(2).all(|w| w[1].time >= w[0].time));
    }
}
