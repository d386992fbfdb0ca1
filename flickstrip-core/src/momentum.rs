//! Inertial continuation after a drag is released
//!
//! The animator is a two-state machine driven by an injected
//! [`FrameScheduler`]. Each tick decays the velocity geometrically, moves the
//! surface by `velocity * time_scale`, and requests the next frame. Once the
//! velocity falls under the stop threshold it is zeroed and no further frame
//! is requested.

use std::mem;

use crate::config::StripConfig;
use crate::frame::{FrameScheduler, FrameToken};
use crate::surface::ScrollSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Stopped,
    Running { velocity: f64, frame: FrameToken },
}

/// Decaying scroll continuation after release.
#[derive(Debug, Clone)]
pub struct MomentumAnimator {
    phase: Phase,
    decay: f64,
    stop_velocity: f64,
    time_scale: f64,
}

impl Default for MomentumAnimator {
    fn default() -> Self {
        Self::new(&StripConfig::default())
    }
}

impl MomentumAnimator {
    /// Stopped animator using the momentum tunables from `cfg`.
    pub fn new(cfg: &StripConfig) -> Self {
        Self {
            phase: Phase::Stopped,
            decay: cfg.momentum_decay,
            stop_velocity: cfg.momentum_stop_velocity,
            time_scale: cfg.momentum_time_scale,
        }
    }

    /// Whether a frame is pending.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Current velocity in units/ms; zero when stopped.
    pub fn velocity(&self) -> f64 {
        match self.phase {
            Phase::Running { velocity, .. } => velocity,
            Phase::Stopped => 0.0,
        }
    }

    /// Frame the running loop is waiting on.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        match self.phase {
            Phase::Running { frame, .. } => Some(frame),
            Phase::Stopped => None,
        }
    }

    /// Begin coasting at `initial_velocity`.
    ///
    /// A zero velocity leaves the animator stopped. Otherwise the first tick
    /// runs immediately and later ticks follow on requested frames.
    pub fn start<S, F>(
        &mut self,
        initial_velocity: f64,
        surface: &mut S,
        frames: &mut F,
    ) where
        S: ScrollSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.cancel(frames);
        if initial_velocity == 0.0 || !initial_velocity.is_finite() {
            return;
        }
        log::debug!("momentum start v={initial_velocity}");
        self.tick(initial_velocity, surface, frames);
    }

    /// Deliver a fired frame. Returns whether a tick ran.
    ///
    /// Tokens other than the pending one belong to cancelled loops and are
    /// ignored.
    pub fn on_frame<S, F>(
        &mut self,
        token: FrameToken,
        surface: &mut S,
        frames: &mut F,
    ) -> bool
    where
        S: ScrollSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        match self.phase {
            Phase::Running { velocity, frame } if frame == token => {
                self.phase = Phase::Stopped;
                self.tick(velocity, surface, frames);
                true
            }
            _ => {
                log::trace!("ignoring stale momentum frame {token:?}");
                false
            }
        }
    }

    /// Stop immediately and drop the scheduled frame. Idempotent.
    pub fn cancel<F: FrameScheduler + ?Sized>(&mut self, frames: &mut F) {
        if let Phase::Running { frame, velocity } =
            mem::replace(&mut self.phase, Phase::Stopped)
        {
            frames.cancel_frame(frame);
            log::debug!("momentum cancelled at v={velocity}");
        }
    }

    fn tick<S, F>(&mut self, velocity: f64, surface: &mut S, frames: &mut F)
    where
        S: ScrollSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let velocity = velocity * self.decay;
        if velocity.abs() < self.stop_velocity {
            self.phase = Phase::Stopped;
            log::debug!("momentum settled at offset {}", surface.offset());
            return;
        }

        surface.set_offset(surface.offset() - velocity * self.time_scale);
        let frame = frames.request_frame();
        self.phase = Phase::Running { velocity, frame };
        log::trace!("momentum tick v={velocity} offset={}", surface.offset());
    }
}
