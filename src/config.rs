//! Board size bounds and playback pacing.

pub const MIN_N: usize = 4;
pub const MAX_N: usize = 10;
pub const DEFAULT_N: usize = 8;

/// Seconds between automatic steps.
pub const MIN_DELAY: f32 = 0.01;
pub const MAX_DELAY: f32 = 1.0;
pub const DEFAULT_DELAY: f32 = 0.5;

/// Layout width below which the controls move to a bottom panel.
pub const MOBILE_BREAKPOINT: f32 = 700.0;

pub fn clamp_size(n: usize) -> usize {
    n.clamp(MIN_N, MAX_N)
}

pub fn clamp_delay(delay: f32) -> f32 {
    delay.clamp(MIN_DELAY, MAX_DELAY)
}
