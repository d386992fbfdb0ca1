//! Drag lifecycle and pointer-to-offset translation

use crate::config::StripConfig;
use crate::surface::ScrollSurface;

/// State of one drag, from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Pointer position the current segment is measured from.
    pub anchor_position: f64,
    /// Surface offset at `anchor_position`.
    pub anchor_offset: f64,
    /// Time of the press that began the drag.
    pub started_at_ms: u64,
    /// Whether any accepted move changed the surface offset.
    pub moved: bool,
}

/// Summary handed back when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    /// Time from press to release (ms).
    pub duration_ms: u64,
    /// Whether the drag changed the surface offset.
    pub moved: bool,
    /// Released before the tap threshold elapsed.
    pub tap: bool,
}

/// Maps pointer movement onto the scroll surface while a drag is active.
///
/// Each accepted move re-anchors the session at the new pointer position and
/// the offset actually applied, so successive moves are relative and the
/// total displacement telescopes to `start - end`.
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    /// Time of the last move that was applied; kept across sessions.
    last_accepted_ms: Option<u64>,
    move_throttle_ms: u64,
    tap_threshold_ms: u64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(&StripConfig::default())
    }
}

impl DragController {
    /// Idle controller using the throttle and tap threshold from `cfg`.
    pub fn new(cfg: &StripConfig) -> Self {
        Self {
            session: None,
            last_accepted_ms: None,
            move_throttle_ms: cfg.move_throttle_ms,
            tap_threshold_ms: cfg.tap_threshold_ms,
        }
    }

    /// Whether a session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag anchored at `position` and the surface's `scroll_offset`.
    ///
    /// A second begin without an end restarts the session at the new anchor.
    pub fn begin(&mut self, position: f64, scroll_offset: f64, now_ms: u64) {
        if self.session.is_some() {
            log::debug!("drag restarted without release at x={position}");
        }
        self.session = Some(DragSession {
            anchor_position: position,
            anchor_offset: scroll_offset,
            started_at_ms: now_ms,
            moved: false,
        });
        log::debug!("drag begin x={position} offset={scroll_offset}");
    }

    /// Apply a pointer move and return the resulting offset.
    ///
    /// Returns `None` when idle or when the move arrives within the throttle
    /// window of the last accepted one; dropped moves are not replayed.
    pub fn move_to<S: ScrollSurface + ?Sized>(
        &mut self,
        position: f64,
        now_ms: u64,
        surface: &mut S,
    ) -> Option<f64> {
        let session = self.session.as_mut()?;

        if let Some(last) = self.last_accepted_ms
            && now_ms.saturating_sub(last) < self.move_throttle_ms
        {
            log::trace!("drag move dropped at {now_ms}ms (last {last}ms)");
            return None;
        }
        self.last_accepted_ms = Some(now_ms);

        let next = session.anchor_offset - (position - session.anchor_position);
        surface.set_offset(next);
        let applied = surface.offset();
        if applied != session.anchor_offset {
            session.moved = true;
        }
        session.anchor_position = position;
        session.anchor_offset = applied;

        log::trace!("drag move x={position} offset={applied}");
        Some(applied)
    }

    /// Finish the drag. Returns `None` when no drag was active.
    pub fn end(&mut self, now_ms: u64) -> Option<DragRelease> {
        let session = self.session.take()?;
        let duration_ms = now_ms.saturating_sub(session.started_at_ms);
        let release = DragRelease {
            duration_ms,
            moved: session.moved,
            tap: duration_ms < self.tap_threshold_ms,
        };
        log::debug!(
            "drag end after {duration_ms}ms (moved={}, tap={})",
            release.moved,
            release.tap
        );
        Some(release)
    }
}
