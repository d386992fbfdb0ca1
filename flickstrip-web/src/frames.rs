//! `requestAnimationFrame`-backed frame scheduler

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use flickstrip_core::{FrameScheduler, FrameToken};
use gloo::render::{AnimationFrame, request_animation_frame};

use crate::WebStrip;

/// Schedules momentum frames on the display's repaint clock.
///
/// Only one frame is outstanding at a time; requesting a new one drops the
/// previous handle, which cancels it. Fired frames are delivered back to the
/// strip through a weak reference so a torn-down strip simply stops.
pub struct RafScheduler {
    strip: Weak<RefCell<WebStrip>>,
    next_id: u64,
    frame: Option<(FrameToken, AnimationFrame)>,
}

impl RafScheduler {
    pub(crate) fn new(strip: Weak<RefCell<WebStrip>>) -> Self {
        Self {
            strip,
            next_id: 0,
            frame: None,
        }
    }
}

impl fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RafScheduler")
            .field("next_id", &self.next_id)
            .field("pending", &self.frame.as_ref().map(|(token, _)| *token))
            .finish()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        let strip = self.strip.clone();
        let handle = request_animation_frame(move |_timestamp| {
            let Some(strip) = strip.upgrade() else {
                return;
            };
            strip.borrow_mut().on_frame(token);
        });
        self.frame = Some((token, handle));
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self
            .frame
            .as_ref()
            .is_some_and(|(pending, _)| *pending == token)
        {
            self.frame.take();
        }
    }
}
