// Math utilities and helper functions

/// Inputs whose magnitude stays below this are treated as released
pub const AXIS_EPSILON: f32 = 0.01;

/// Count a timer down by `dt`, never going below zero
pub fn countdown(timer: f32, dt: f32) -> f32 {
    (timer - dt).max(0.0)
}
