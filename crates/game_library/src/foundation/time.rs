//! Time management utilities

use std::time::{Duration, Instant};

/// Snapshot of game time handed to the world each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    elapsed: Duration,
    total: Duration,
}

impl FrameTime {
    /// Create a frame time from the elapsed frame duration and total game time
    pub fn new(elapsed: Duration, total: Duration) -> Self {
        Self { elapsed, total }
    }

    /// Frame time for a single frame of `millis` milliseconds
    pub fn from_millis(millis: u64) -> Self {
        let elapsed = Duration::from_millis(millis);
        Self::new(elapsed, elapsed)
    }

    /// Time since the previous frame
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total game time including this frame
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Elapsed frame time in (fractional) milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    /// Elapsed frame time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta: Duration,
    total: Duration,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            total: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update the timer from the wall clock (should be called once per frame)
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Advance the timer by a fixed step, ignoring the wall clock
    pub fn advance(&mut self, elapsed: Duration) -> FrameTime {
        self.delta = elapsed;
        self.total += elapsed;
        self.frame_count += 1;
        FrameTime::new(self.delta, self.total)
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the total elapsed game time
    pub fn total_time(&self) -> Duration {
        self.total
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        let total = self.total.as_secs_f32();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_units() {
        let frame = FrameTime::from_millis(16);
        assert_eq!(frame.elapsed_millis(), 16.0);
        assert!((frame.elapsed_secs() - 0.016).abs() < 1e-6);
        assert_eq!(frame.total(), Duration::from_millis(16));
    }

    #[test]
    fn test_timer_advance_accumulates() {
        let mut timer = Timer::new();
        timer.advance(Duration::from_millis(10));
        let frame = timer.advance(Duration::from_millis(20));

        assert_eq!(frame.elapsed(), Duration::from_millis(20));
        assert_eq!(frame.total(), Duration::from_millis(30));
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_stopwatch_stops_accumulating() {
        let mut stopwatch = Stopwatch::start_new();
        assert!(stopwatch.is_running());
        stopwatch.stop();
        let first = stopwatch.elapsed();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), first);
    }
}
