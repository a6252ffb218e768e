//! Frame timing for the overlay's graphs and readouts.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of frame durations.
///
/// Call [`tick`](Self::tick) once per frame; the getters summarize the
/// window for the FPS readout and for scaling graph samples.
pub struct FrameTimer {
    samples: VecDeque<Duration>,
    last_tick: Instant,
    window: usize,
}

impl FrameTimer {
    /// Keep at most `window` samples (one per frame).
    pub fn new(window: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(window),
            last_tick: Instant::now(),
            window,
        }
    }

    /// Record a frame boundary and return the elapsed time since the last.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;

        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(dt);
        dt
    }

    /// Average frames per second over the window; 0 before the first tick.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.samples.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / total
    }

    /// Mean frame time in milliseconds over the window.
    pub fn average_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(|d| d.as_secs_f64()).sum();
        total / self.samples.len() as f64 * 1000.0
    }

    /// Slowest frame in the window, in milliseconds.
    pub fn worst_ms(&self) -> f64 {
        self.samples
            .iter()
            .max()
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(120)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_timer_reports_zero() {
        let timer = FrameTimer::default();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.average_ms(), 0.0);
        assert_eq!(timer.worst_ms(), 0.0);
        assert_eq!(timer.sample_count(), 0);
    }

    #[test]
    fn tick_accumulates_samples() {
        let mut timer = FrameTimer::new(16);
        for _ in 0..5 {
            std::thread::sleep(Duration::from_millis(1));
            timer.tick();
        }
        assert_eq!(timer.sample_count(), 5);
        assert!(timer.fps() > 0.0);
        assert!(timer.average_ms() > 0.0);
        assert!(timer.worst_ms() >= timer.average_ms());
    }

    #[test]
    fn window_caps_sample_count() {
        let mut timer = FrameTimer::new(8);
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.sample_count(), 8);
    }
}
