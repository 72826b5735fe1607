#![forbid(unsafe_code)]

//! Pointer velocity estimation for fling detection.
//!
//! Uses the impulse strategy: velocity is derived from the kinetic energy
//! imparted by successive samples, which is robust to the uneven sample
//! spacing of real touch streams.
//!
//! # Invariants
//!
//! - Only samples within [`HORIZON_MS`] of the newest sample contribute.
//! - A gap larger than [`ASSUME_STOPPED_MS`] between consecutive samples
//!   ends the window (the pointer is considered to have stopped there).
//! - Fewer than two usable samples yield a velocity of `0.0`.

use crate::geometry::Point;

/// Ring buffer size.
const HISTORY_SIZE: usize = 20;

/// Only samples this recent (relative to the newest) are used.
pub const HORIZON_MS: i64 = 100;

/// A pause this long between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Debug, Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Debug, Clone)]
pub struct AxisVelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for AxisVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisVelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Record a position at the given time.
    pub fn add(&mut self, time_ms: i64, value: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, value });
    }

    /// Velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut values = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous = sample;

            values[count] = sample.value;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&values[..count], &times[..count]) * 1000.0
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Samples are ordered newest first; `times` are non-positive ages in ms.
fn impulse_velocity(values: &[f32], times: &[f32]) -> f32 {
    let start = values.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (values[i - 1] - values[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Two-axis velocity in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

/// Tracks both axes of a pointer.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    x: AxisVelocityTracker,
    y: AxisVelocityTracker,
}

impl VelocityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x: AxisVelocityTracker::new(),
            y: AxisVelocityTracker::new(),
        }
    }

    /// Record a pointer position.
    pub fn add(&mut self, time_ms: i64, position: Point) {
        self.x.add(time_ms, position.x);
        self.y.add(time_ms, position.y);
    }

    /// Current velocity, each axis clamped to `±max` (`max <= 0` disables
    /// clamping).
    #[must_use]
    pub fn velocity(&self, max: f32) -> Velocity {
        let clamp = |v: f32| {
            if !v.is_finite() {
                0.0
            } else if max > 0.0 {
                v.clamp(-max, max)
            } else {
                v
            }
        };
        Velocity {
            x: clamp(self.x.velocity()),
            y: clamp(self.y.velocity()),
        }
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }
}
