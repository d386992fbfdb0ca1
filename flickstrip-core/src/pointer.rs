//! Pointer input samples consumed by the interaction core

/// Input device that produced a pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse button press.
    #[default]
    Mouse,
    /// Touch contact.
    Touch,
}

/// Horizontal pointer position paired with the time it was observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Horizontal coordinate in surface units.
    pub position: f64,
    /// Event time in milliseconds.
    pub timestamp_ms: u64,
    /// Device that produced the sample.
    pub kind: PointerKind,
}

impl PointerSample {
    /// Mouse sample.
    pub fn new(position: f64, timestamp_ms: u64) -> Self {
        Self {
            position,
            timestamp_ms,
            kind: PointerKind::Mouse,
        }
    }

    /// Touch sample.
    pub fn touch(position: f64, timestamp_ms: u64) -> Self {
        Self {
            position,
            timestamp_ms,
            kind: PointerKind::Touch,
        }
    }
}
