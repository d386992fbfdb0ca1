//! Horizontal scroll surface shared by drag and momentum

/// A scrollable container exposing a single horizontal offset.
///
/// Implementations may clamp written values (a browser clamps `scrollLeft`
/// to the scrollable range); callers read the offset back after writing
/// when they need the effective position.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface {
    /// Current horizontal offset.
    fn offset(&self) -> f64;
    /// Write a new offset; the surface may clamp it.
    fn set_offset(&mut self, offset: f64);
}

/// In-memory surface with an optional scrollable range.
///
/// Used for headless drivers and tests; with no range set it behaves as an
/// unbounded number line.
#[derive(Debug, Default, Clone)]
pub struct StripSurface {
    offset: f64,
    max_offset: Option<f64>,
}

impl StripSurface {
    /// Unbounded surface starting at `offset`.
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            max_offset: None,
        }
    }

    /// Surface clamped to `0.0..=max_offset`, like a browser scroll container.
    pub fn bounded(offset: f64, max_offset: f64) -> Self {
        let max_offset = max_offset.max(0.0);
        Self {
            offset: offset.clamp(0.0, max_offset),
            max_offset: Some(max_offset),
        }
    }

    /// Upper clamp, if bounded.
    pub fn max_offset(&self) -> Option<f64> {
        self.max_offset
    }
}

impl ScrollSurface for StripSurface {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = match self.max_offset {
            Some(max) => offset.clamp(0.0, max),
            None => offset,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_surface_accepts_any_offset() {
        let mut surface = StripSurface::new(0.0);
        surface.set_offset(-42.5);
        assert_eq!(surface.offset(), -42.5);
    }

    #[test]
    fn bounded_surface_clamps_writes() {
        let mut surface = StripSurface::bounded(10.0, 300.0);
        surface.set_offset(450.0);
        assert_eq!(surface.offset(), 300.0);
        surface.set_offset(-5.0);
        assert_eq!(surface.offset(), 0.0);
    }

    #[test]
    fn bounded_surface_clamps_initial_offset() {
        let surface = StripSurface::bounded(900.0, 300.0);
        assert_eq!(surface.offset(), 300.0);
        assert_eq!(surface.max_offset(), Some(300.0));
    }
}
