/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval in seconds
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Accumulate delta, returns the elapsed window when the interval is reached
    pub fn try_tick(&mut self, delta: f32) -> Option<f32> {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            let elapsed = self.time_since_last;
            self.time_since_last = 0.0;
            Some(elapsed)
        } else {
            None
        }
    }
}

/// Frames-per-second counter refreshed at a fixed interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    window: Throttled,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(update_interval: f32) -> Self {
        Self {
            window: Throttled::new(update_interval),
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new value whenever it is refreshed.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window.try_tick(delta)?;
        self.fps = self.frames as f32 / elapsed;
        self.frames = 0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(0.1);

        assert_eq!(timer.try_tick(0.05), None);
        assert!(timer.try_tick(0.06).is_some());
        assert_eq!(timer.try_tick(0.01), None);
    }

    #[test]
    fn fps_counter_reports_after_interval() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..59 {
            assert_eq!(counter.tick(1.0 / 60.0), None);
        }
        let fps = counter.tick(1.0 / 60.0 + 1e-4).expect("interval elapsed");
        assert!((fps - 60.0).abs() < 0.5, "fps was {}", fps);
        assert_eq!(counter.fps(), fps);
    }

    #[test]
    fn fps_counter_starts_at_zero() {
        let counter = FpsCounter::new(1.0);
        assert_eq!(counter.fps(), 0.0);
    }
}
