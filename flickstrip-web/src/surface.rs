use flickstrip_core::ScrollSurface;
use web_sys::Element;

/// Scroll container whose `scrollLeft` is the strip offset.
///
/// The browser clamps and rounds writes, so reads after a write return the
/// effective position.
#[derive(Debug, Clone)]
pub struct ElementSurface {
    element: Element,
}

impl ElementSurface {
    /// Surface over `element`'s horizontal scroll position.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The scrolled element.
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ScrollSurface for ElementSurface {
    fn offset(&self) -> f64 {
        f64::from(self.element.scroll_left())
    }

    fn set_offset(&mut self, offset: f64) {
        self.element.set_scroll_left(offset.round() as i32);
    }
}
