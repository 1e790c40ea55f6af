//! Global tuning constants for the simulation core.

/// Default downward gravity magnitude (m/s^2).
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Reference tick duration for external drivers (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Sub-step count past which a single tick is logged as degenerate.
pub const SUBSTEP_WARN_THRESHOLD: u32 = 64;
