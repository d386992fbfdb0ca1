//! Instantaneous horizontal velocity from timestamped pointer positions

/// Tracks the last pointer sample and the velocity derived from it.
///
/// Velocity is expressed in surface units per millisecond and is signed:
/// positive when the pointer travels toward larger coordinates.
#[derive(Debug, Default, Clone)]
pub struct VelocityTracker {
    last_position: f64,
    last_timestamp_ms: u64,
    velocity: f64,
}

impl VelocityTracker {
    /// Tracker at rest with zero velocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed the tracker at the start of a drag and clear the estimate.
    ///
    /// Clearing means a press-and-release with no accepted move releases at
    /// zero velocity, so tapping a coasting strip stops it rather than
    /// relaunching the previous fling.
    pub fn anchor(&mut self, position: f64, now_ms: u64) {
        self.last_position = position;
        self.last_timestamp_ms = now_ms;
        self.velocity = 0.0;
    }

    /// Fold a new sample into the estimate and return the current velocity.
    ///
    /// A sample that is not strictly newer than the previous one keeps the
    /// previous velocity instead of dividing by zero.
    pub fn update(&mut self, position: f64, now_ms: u64) -> f64 {
        let elapsed = now_ms as i64 - self.last_timestamp_ms as i64;
        if elapsed > 0 {
            self.velocity = (position - self.last_position) / elapsed as f64;
        }
        self.last_position = position;
        self.last_timestamp_ms = now_ms;
        self.velocity
    }

    /// Latest estimate in units/ms.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_is_distance_over_elapsed_time() {
        let mut tracker = VelocityTracker::new();
        tracker.anchor(100.0, 1_000);
        let v = tracker.update(70.0, 1_020);
        assert!((v - (-1.5)).abs() < 1e-12);
        assert_eq!(tracker.velocity(), v);
    }

    #[test]
    fn zero_elapsed_time_keeps_previous_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.anchor(0.0, 0);
        let before = tracker.update(32.0, 16);
        let after = tracker.update(500.0, 16);
        assert_eq!(before, 2.0);
        assert_eq!(after, before);
    }

    #[test]
    fn backwards_timestamp_keeps_previous_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.anchor(0.0, 100);
        let before = tracker.update(-16.0, 116);
        let after = tracker.update(40.0, 90);
        assert_eq!(after, before);
    }

    #[test]
    fn guarded_update_still_moves_the_reference_sample() {
        let mut tracker = VelocityTracker::new();
        tracker.anchor(0.0, 100);
        tracker.update(10.0, 100);
        // Reference is now (10, 100), so the next step measures from there.
        let v = tracker.update(30.0, 110);
        assert_eq!(v, 2.0);
    }

    #[test]
    fn anchor_clears_previous_estimate() {
        let mut tracker = VelocityTracker::new();
        tracker.anchor(0.0, 0);
        tracker.update(50.0, 10);
        tracker.anchor(200.0, 500);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
