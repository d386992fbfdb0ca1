//! StripInteraction: one controller per strip, owning every piece of
//! interaction state
//!
//! Pointer events enter in arrival order. A drag and a momentum loop never
//! run at the same time: pressing the pointer cancels any coasting before the
//! drag begins, and momentum only starts from a release.

use crate::click_guard::ClickSuppressor;
use crate::config::StripConfig;
use crate::drag::{DragController, DragRelease};
use crate::frame::{FrameScheduler, FrameToken};
use crate::momentum::MomentumAnimator;
use crate::pointer::PointerSample;
use crate::surface::ScrollSurface;
use crate::velocity::VelocityTracker;

/// Interaction controller for one strip.
///
/// Owns the drag, velocity and momentum state together with the scroll
/// surface and frame scheduler it drives.
#[derive(Debug)]
pub struct StripInteraction<S, F> {
    config: StripConfig,
    drag: DragController,
    velocity: VelocityTracker,
    momentum: MomentumAnimator,
    /// Summary of the drag that most recently ended, until the next press.
    last_release: Option<DragRelease>,
    /// Bumped on every strip or link press.
    press_seq: u64,
    /// Press number that began the current or most recent drag.
    drag_press: u64,
    surface: S,
    frames: F,
}

impl<S: ScrollSurface, F: FrameScheduler> StripInteraction<S, F> {
    /// Controller at rest over `surface`, scheduling frames on `frames`.
    pub fn new(config: StripConfig, surface: S, frames: F) -> Self {
        Self {
            drag: DragController::new(&config),
            velocity: VelocityTracker::new(),
            momentum: MomentumAnimator::new(&config),
            last_release: None,
            press_seq: 0,
            drag_press: 0,
            config,
            surface,
            frames,
        }
    }

    /// Press on the strip: stop coasting and start a drag at the current
    /// offset.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.momentum.cancel(&mut self.frames);
        self.press_seq += 1;
        self.drag_press = self.press_seq;
        self.velocity.anchor(sample.position, sample.timestamp_ms);
        self.drag.begin(
            sample.position,
            self.surface.offset(),
            sample.timestamp_ms,
        );
        self.last_release = None;
    }

    /// Pointer travel. Returns the applied offset, or `None` when idle or
    /// throttled.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<f64> {
        let offset = self.drag.move_to(
            sample.position,
            sample.timestamp_ms,
            &mut self.surface,
        )?;
        self.velocity.update(sample.position, sample.timestamp_ms);
        Some(offset)
    }

    /// Release: end the drag and hand the last velocity to momentum.
    pub fn pointer_up(&mut self, now_ms: u64) -> Option<DragRelease> {
        let release = self.drag.end(now_ms)?;
        self.last_release = Some(release);
        self.momentum.start(
            self.velocity.velocity(),
            &mut self.surface,
            &mut self.frames,
        );
        Some(release)
    }

    /// Deliver a frame requested through the scheduler. Returns whether the
    /// momentum loop advanced.
    pub fn on_frame(&mut self, token: FrameToken) -> bool {
        self.momentum
            .on_frame(token, &mut self.surface, &mut self.frames)
    }

    /// Whether the strip is being dragged, or the drag that most recently
    /// ended actually scrolled it. Cleared by the next press.
    ///
    /// Link clicks only honor the second half for links pressed as part of
    /// that drag; see [`Self::should_suppress_click`].
    pub fn drag_in_progress(&self) -> bool {
        self.drag.is_dragging()
            || self.last_release.is_some_and(|release| release.moved)
    }

    /// New click guard using the configured slop.
    pub fn click_guard(&self) -> ClickSuppressor {
        ClickSuppressor::new(self.config.click_slop)
    }

    /// Press on a link: record the press on its guard and forget the
    /// previous drag, since this is a new interaction.
    pub fn press_link(&mut self, guard: &mut ClickSuppressor, x: f64, y: f64) {
        self.press_seq += 1;
        guard.pointer_down(x, y);
        guard.stamp(self.press_seq);
        self.last_release = None;
    }

    /// Decide whether a click on the link owning `guard` must be vetoed.
    ///
    /// A finished drag only vetoes links pressed in the same gesture, so a
    /// keyboard or scripted click on any other link goes through.
    pub fn should_suppress_click(
        &self,
        guard: &ClickSuppressor,
        x: f64,
        y: f64,
    ) -> bool {
        let dragged = self.drag.is_dragging()
            || (self.drag_in_progress() && self.pressed_with_last_drag(guard));
        guard.should_suppress(x, y, dragged)
    }

    /// The link press and the strip press of one gesture arrive back to
    /// back, in either order.
    fn pressed_with_last_drag(&self, guard: &ClickSuppressor) -> bool {
        guard
            .press_seq()
            .is_some_and(|seq| seq + 1 >= self.drag_press)
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the momentum loop is running.
    pub fn is_coasting(&self) -> bool {
        self.momentum.is_running()
    }

    /// Latest pointer velocity estimate (units/ms).
    pub fn velocity(&self) -> f64 {
        self.velocity.velocity()
    }

    /// Momentum state, for inspection.
    pub fn momentum(&self) -> &MomentumAnimator {
        &self.momentum
    }

    /// Tunables this strip was built with.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Scroll surface being driven.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the scroll surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Frame scheduler momentum requests frames from.
    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Mutable access to the frame scheduler.
    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }
}
