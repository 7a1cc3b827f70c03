use std::time::Instant;

/// Wall-clock frame timer with a once-per-second fps average.
///
/// One clock per loop: [`tick`](Self::tick) marks a frame boundary and
/// returns the delta in seconds. The fps average closes over roughly
/// one-second windows; [`take_fps_sample`](Self::take_fps_sample) yields
/// each fresh average exactly once, which is the rate the demo logs at.
pub struct FrameClock {
    started: Instant,
    previous: Instant,
    frame: u64,

    window_start: Instant,
    window_frames: u32,
    fps: f32,
    fps_sample: Option<f32>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            previous: now,
            frame: 0,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
            fps_sample: None,
        }
    }

    /// Marks a frame boundary; returns the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.previous).as_secs_f32();
        self.previous = now;
        self.frame += 1;

        self.window_frames += 1;
        let window = (now - self.window_start).as_secs_f32();
        if window >= 1.0 {
            self.fps = self.window_frames as f32 / window;
            self.fps_sample = Some(self.fps);
            self.window_start = now;
            self.window_frames = 0;
        }

        dt
    }

    /// The fresh average when a one-second window just closed, `None`
    /// otherwise. Taking the sample clears it until the next window.
    pub fn take_fps_sample(&mut self) -> Option<f32> {
        self.fps_sample.take()
    }

    /// The most recently completed one-second average.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        (self.previous - self.started).as_secs_f32()
    }

    /// Total ticks since creation.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_frames_and_returns_nonnegative_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);

        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert_eq!(clock.frame(), 1);
        assert!(clock.elapsed_seconds() >= dt);
    }

    #[test]
    fn fps_sample_stays_empty_until_a_window_closes() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert_eq!(clock.take_fps_sample(), None);
        assert!(clock.fps() == 0.0);
    }
}
