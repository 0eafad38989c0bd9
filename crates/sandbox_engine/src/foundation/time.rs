//! Time management utilities

use std::time::Instant;

/// Where a [`FrameClock`] gets its per-frame delta from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Wall-clock time between `update` calls
    RealTime,
    /// A constant step per `update`, independent of wall time
    Fixed(f32),
}

/// Frame timer feeding the simulation its delta time
///
/// Also keeps a frames-per-second counter that reports the number of frames
/// completed during the last full second of clock time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: ClockMode,
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    frames_this_second: u32,
    second_accumulator: f32,
    frames_per_second: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a real-time clock
    pub fn new() -> Self {
        Self::with_mode(ClockMode::RealTime)
    }

    /// Create a clock that advances by `step` seconds on every update
    pub fn fixed(step: f32) -> Self {
        Self::with_mode(ClockMode::Fixed(step.max(0.0)))
    }

    /// Create a clock with an explicit mode
    pub fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            frames_this_second: 0,
            second_accumulator: 0.0,
            frames_per_second: 0,
        }
    }

    /// Switch to fixed stepping (or back to real time with `None`)
    pub fn set_fixed_step(&mut self, step: Option<f32>) {
        self.mode = step.map_or(ClockMode::RealTime, |s| ClockMode::Fixed(s.max(0.0)));
        self.last_frame = Instant::now();
    }

    /// Current clock mode
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Update the clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = match self.mode {
            ClockMode::RealTime => now.duration_since(self.last_frame).as_secs_f32(),
            ClockMode::Fixed(step) => step,
        };
        self.last_frame = now;
        self.total_time += self.delta_time;
        self.frame_count += 1;

        self.frames_this_second += 1;
        self.second_accumulator += self.delta_time;
        if self.second_accumulator >= 1.0 {
            self.frames_per_second = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_accumulator -= 1.0;
        }
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed clock time
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames completed during the last full second
    pub fn frames_per_second(&self) -> u32 {
        self.frames_per_second
    }

    /// Average frame time in milliseconds over the last full second
    pub fn frame_time_ms(&self) -> f32 {
        if self.frames_per_second > 0 {
            1000.0 / self.frames_per_second as f32
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_step_delta() {
        let mut clock = FrameClock::fixed(0.5);
        assert_eq!(clock.delta_time(), 0.0);

        clock.update();
        clock.update();

        assert_eq!(clock.delta_time(), 0.5);
        assert_relative_eq!(clock.total_time(), 1.0);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_frames_per_second_counts_last_full_second() {
        let mut clock = FrameClock::fixed(0.25);
        for _ in 0..3 {
            clock.update();
        }
        assert_eq!(clock.frames_per_second(), 0);

        clock.update();
        assert_eq!(clock.frames_per_second(), 4);
        assert_relative_eq!(clock.frame_time_ms(), 250.0);
    }

    #[test]
    fn test_negative_step_is_clamped() {
        let mut clock = FrameClock::fixed(-1.0);
        clock.update();
        assert_eq!(clock.delta_time(), 0.0);
    }

    #[test]
    fn test_switch_mode() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.mode(), ClockMode::RealTime);

        clock.set_fixed_step(Some(1.0));
        clock.update();
        assert_eq!(clock.delta_time(), 1.0);

        clock.set_fixed_step(None);
        assert_eq!(clock.mode(), ClockMode::RealTime);
    }
}
