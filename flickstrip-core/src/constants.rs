//! Interaction tuning constants
//!
//! Defaults for drag, click and momentum behavior. [`crate::StripConfig`]
//! falls back to these values, so tuning the feel of every strip happens here.

/// Drag tracking defaults.
pub mod drag {
    /// Minimum spacing between accepted pointer moves (ms), ~60 Hz.
    pub const MOVE_THROTTLE_MS: u64 = 16;
    /// A drag released within this many ms of its start counts as a tap.
    pub const TAP_THRESHOLD_MS: u64 = 100;
}

/// Click-vs-drag disambiguation on links.
pub mod click {
    /// Per-axis distance (surface units) beyond which a click is vetoed.
    pub const SLOP: f64 = 5.0;
}

/// Momentum decay after release.
pub mod momentum {
    /// Multiplier applied to the velocity on every frame.
    pub const DECAY: f64 = 0.95;
    /// Velocity magnitude (units/ms) below which momentum stops.
    pub const STOP_VELOCITY: f64 = 0.1;
    /// Converts velocity (units/ms) into an offset delta per frame.
    pub const TIME_SCALE: f64 = 20.0;
}
