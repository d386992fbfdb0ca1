//! Drag-to-scroll interaction core for horizontally scrolling slide strips.
//!
//! The crate turns timestamped pointer samples into scroll offset updates,
//! estimates release velocity, and continues the motion with a decaying
//! momentum loop after release. Rendering and DOM wiring live elsewhere; the
//! core only sees a [`ScrollSurface`] holding a numeric offset and a
//! [`FrameScheduler`] that calls back once per display frame.

/// Click veto for links inside the strip.
pub mod click_guard;
/// Tunables loaded from TOML.
pub mod config;
/// Default tuning values.
pub mod constants;
/// Drag lifecycle.
pub mod drag;
/// Configuration errors.
pub mod error;
/// Frame scheduling.
pub mod frame;
/// The per-strip controller.
pub mod interaction;
/// Momentum after release.
pub mod momentum;
/// Pointer samples.
pub mod pointer;
/// Slide descriptors.
pub mod slides;
/// Scroll surfaces.
pub mod surface;
/// Velocity estimation.
pub mod velocity;

pub use click_guard::ClickSuppressor;
pub use config::StripConfig;
pub use drag::{DragController, DragRelease, DragSession};
pub use error::{ConfigError, Result};
pub use frame::{FrameScheduler, FrameToken, ManualFrames};
pub use interaction::StripInteraction;
pub use momentum::MomentumAnimator;
pub use pointer::{PointerKind, PointerSample};
pub use slides::{Slide, build_slides};
pub use surface::{ScrollSurface, StripSurface};
pub use velocity::VelocityTracker;

/// Frequently used items for binding crates.
pub mod prelude {
    pub use super::{
        ClickSuppressor, DragRelease, FrameScheduler, FrameToken, PointerKind,
        PointerSample, ScrollSurface, StripConfig, StripInteraction,
    };
}
