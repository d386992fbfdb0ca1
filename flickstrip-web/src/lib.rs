//! Browser binding for flickstrip.
//!
//! Renders the slide strip into an existing page and drives
//! [`flickstrip_core::StripInteraction`] from mouse and touch events, using
//! the element's `scrollLeft` as the scroll surface and
//! `requestAnimationFrame` for momentum frames.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use flickstrip_core::{
    ScrollSurface, StripConfig, StripInteraction, build_slides,
};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

mod dom;
mod frames;
mod listeners;
mod surface;

pub use frames::RafScheduler;
pub use surface::ElementSurface;

/// Interaction controller as wired into the page.
pub type WebStrip = StripInteraction<ElementSurface, RafScheduler>;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        gloo::console::warn!("flickstrip: logger already initialized");
    }
}

/// Where to mount and what to show.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Selector of the horizontally scrolling container.
    pub slider_selector: String,
    /// Id of the element that receives the slide containers.
    pub content_id: String,
    /// Number of slide containers to render.
    pub total_slides: usize,
    /// Image URLs, paired with slides in order.
    pub images: Vec<String>,
    /// Interaction tunables.
    pub config: StripConfig,
}

/// Keeps a mounted strip alive. Dropping it detaches every listener.
#[wasm_bindgen]
pub struct StripHandle {
    strip: Rc<RefCell<WebStrip>>,
    _listeners: Vec<EventListener>,
}

impl fmt::Debug for StripHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripHandle")
            .field("listeners", &self._listeners.len())
            .finish()
    }
}

#[wasm_bindgen]
impl StripHandle {
    /// Whether a drag is active.
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.strip.borrow().is_dragging()
    }

    /// Whether momentum is running.
    #[wasm_bindgen(js_name = isCoasting)]
    pub fn is_coasting(&self) -> bool {
        self.strip.borrow().is_coasting()
    }

    /// Current `scrollLeft` of the slider.
    pub fn offset(&self) -> f64 {
        self.strip.borrow().surface().offset()
    }
}

/// Render the slides and attach the drag, momentum and click handling.
pub fn mount(options: StripOptions) -> Result<StripHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("missing document"))?;
    let slider = document
        .query_selector(&options.slider_selector)?
        .ok_or_else(|| {
            JsValue::from_str(&format!(
                "no element matches `{}`",
                options.slider_selector
            ))
        })?;
    let content =
        document.get_element_by_id(&options.content_id).ok_or_else(|| {
            JsValue::from_str(&format!("no element with id `{}`", options.content_id))
        })?;

    let slides = build_slides(options.total_slides, options.images);
    let links = dom::render_slides(&document, &content, &slides)?;

    let surface = ElementSurface::new(slider.clone());
    let config = options.config;
    let strip = Rc::new_cyclic(|weak| {
        RefCell::new(StripInteraction::new(
            config,
            surface,
            RafScheduler::new(weak.clone()),
        ))
    });
    let listeners = listeners::install(&strip, &slider, &content, &links)?;

    log::info!(
        "mounted strip with {} slides on `{}`",
        slides.len(),
        options.slider_selector
    );
    Ok(StripHandle {
        strip,
        _listeners: listeners,
    })
}

/// JavaScript entry point. `config_toml` overrides tuning values; omitted
/// keys keep their defaults.
#[wasm_bindgen(js_name = mountStrip)]
pub fn mount_strip(
    slider_selector: String,
    content_id: String,
    total_slides: usize,
    images: Vec<String>,
    config_toml: Option<String>,
) -> Result<StripHandle, JsValue> {
    let config = match config_toml.as_deref() {
        Some(raw) => StripConfig::from_toml_str(raw)
            .map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => StripConfig::default(),
    };
    mount(StripOptions {
        slider_selector,
        content_id,
        total_slides,
        images,
        config,
    })
}
