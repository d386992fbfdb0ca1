//! Click-versus-drag disambiguation for links embedded in the strip

use crate::constants::click;

/// Per-link record of where the pointer went down.
///
/// A click is vetoed when a drag was in progress or when the pointer
/// travelled more than the slop on either axis between press and click.
/// The two checks are independent: a drag that returns to its starting point
/// still suppresses the click.
#[derive(Debug, Clone)]
pub struct ClickSuppressor {
    down: Option<(f64, f64)>,
    /// Press number stamped by the owning strip.
    press_seq: Option<u64>,
    slop: f64,
}

impl Default for ClickSuppressor {
    fn default() -> Self {
        Self::new(click::SLOP)
    }
}

impl ClickSuppressor {
    /// Guard with no press recorded, vetoing travel beyond `slop`.
    pub fn new(slop: f64) -> Self {
        Self {
            down: None,
            press_seq: None,
            slop,
        }
    }

    /// Remember the press position (mouse down or first touch point).
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.down = Some((x, y));
    }

    pub(crate) fn stamp(&mut self, press_seq: u64) {
        self.press_seq = Some(press_seq);
    }

    pub(crate) fn press_seq(&self) -> Option<u64> {
        self.press_seq
    }

    /// Decide whether the click at `(x, y)` must be vetoed.
    ///
    /// Without a recorded press only the drag check applies.
    pub fn should_suppress(&self, x: f64, y: f64, drag_in_progress: bool) -> bool {
        if drag_in_progress {
            return true;
        }
        let Some((down_x, down_y)) = self.down else {
            return false;
        };
        let dx = (x - down_x).abs();
        let dy = (y - down_y).abs();
        let suppress = dx > self.slop || dy > self.slop;
        if suppress {
            log::debug!("click suppressed after travel dx={dx} dy={dy}");
        }
        suppress
    }
}
