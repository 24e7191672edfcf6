/// Fixed timestep scheduling
///
/// Converts variable frame durations into a whole number of fixed-length
/// simulation ticks. The character controller and the physics world both
/// advance by exactly `FIXED_TIMESTEP` per tick, so a recorded sequence of
/// inputs replays identically regardless of frame pacing.
use std::time::Duration;

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulator that schedules fixed ticks
#[derive(Debug, Default)]
pub struct FixedTimestep {
    /// Time not yet consumed by a tick
    accumulator: Duration,

    /// Total ticks scheduled
    tick_count: u64,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's duration, returns the number of fixed ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Drop the backlog we refused to simulate
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Get the fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
