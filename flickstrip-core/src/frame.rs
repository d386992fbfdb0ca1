//! Per-frame scheduling capability
//!
//! The momentum loop never sleeps or spawns; it asks a [`FrameScheduler`] for
//! a callback before the next repaint and gets a [`FrameToken`] back. The
//! driver hands that token to [`crate::StripInteraction::on_frame`] when the
//! frame fires. In a browser this sits on `requestAnimationFrame`; in tests
//! [`ManualFrames`] lets the caller step frames synchronously.

use std::collections::VecDeque;

/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// Source of once-per-frame callbacks.
#[cfg_attr(test, mockall::automock)]
pub trait FrameScheduler {
    /// Request a callback before the next repaint.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a previously requested frame. Unknown or already fired tokens
    /// are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Synchronous stepping scheduler.
///
/// Requested frames queue up in order; [`ManualFrames::next_frame`] pops the
/// oldest one so the caller can deliver it.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: u64,
    pending: VecDeque<FrameToken>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrames {
    /// Scheduler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending frame, as if the display just repainted.
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        self.pending.pop_front()
    }

    /// Frames requested and not yet delivered or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total frames requested over the scheduler's lifetime.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total frames cancelled before they fired.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending.push_back(token);
        self.requested += 1;
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != token);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
