//! DOM event wiring
//!
//! Presses start on the strip content; moves and releases are observed on
//! the document so a drag keeps tracking after the pointer leaves the strip.
//! Every listener that may cancel the default action is registered as
//! non-passive.

use std::cell::RefCell;
use std::rc::Rc;

use flickstrip_core::PointerSample;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlAnchorElement, MouseEvent, Touch, TouchEvent};

use crate::WebStrip;

const NON_PASSIVE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

const GRABBING_CLASS: &str = "grabbing";

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().get(0)
}

fn started_on_link(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
        .is_some()
}

fn set_grabbing(slider: &Element, grabbing: bool) {
    let classes = slider.class_list();
    let result = if grabbing {
        classes.add_1(GRABBING_CLASS)
    } else {
        classes.remove_1(GRABBING_CLASS)
    };
    if let Err(err) = result {
        log::warn!("failed to toggle grabbing class: {err:?}");
    }
}

/// Register strip, document and per-link listeners. Dropping the returned
/// listeners detaches them.
pub(crate) fn install(
    strip: &Rc<RefCell<WebStrip>>,
    slider: &Element,
    content: &Element,
    links: &[HtmlAnchorElement],
) -> Result<Vec<EventListener>, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("missing document"))?;

    let mut listeners = Vec::new();

    {
        let strip = Rc::clone(strip);
        let slider = slider.clone();
        listeners.push(EventListener::new_with_options(
            content,
            "mousedown",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                strip.borrow_mut().pointer_down(PointerSample::new(
                    f64::from(event.client_x()),
                    now_ms(),
                ));
                set_grabbing(&slider, true);
                event.prevent_default();
            },
        ));
    }

    {
        let strip = Rc::clone(strip);
        listeners.push(EventListener::new_with_options(
            &document,
            "mousemove",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut strip = strip.borrow_mut();
                if !strip.is_dragging() {
                    return;
                }
                event.prevent_default();
                strip.pointer_move(PointerSample::new(
                    f64::from(event.client_x()),
                    now_ms(),
                ));
            },
        ));
    }

    {
        let strip = Rc::clone(strip);
        let slider = slider.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "mouseup",
            NON_PASSIVE,
            move |event: &Event| {
                if strip.borrow_mut().pointer_up(now_ms()).is_some() {
                    event.prevent_default();
                    set_grabbing(&slider, false);
                }
            },
        ));
    }

    {
        let strip = Rc::clone(strip);
        let slider = slider.clone();
        listeners.push(EventListener::new_with_options(
            content,
            "touchstart",
            NON_PASSIVE,
            move |event: &Event| {
                // Touches on links are left to the link so taps navigate.
                if started_on_link(event) {
                    return;
                }
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(touch) = first_touch(event) else {
                    return;
                };
                strip.borrow_mut().pointer_down(PointerSample::touch(
                    f64::from(touch.client_x()),
                    now_ms(),
                ));
                set_grabbing(&slider, true);
                event.prevent_default();
            },
        ));
    }

    {
        let strip = Rc::clone(strip);
        listeners.push(EventListener::new_with_options(
            &document,
            "touchmove",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let mut strip = strip.borrow_mut();
                if !strip.is_dragging() {
                    return;
                }
                event.prevent_default();
                let Some(touch) = first_touch(event) else {
                    return;
                };
                strip.pointer_move(PointerSample::touch(
                    f64::from(touch.client_x()),
                    now_ms(),
                ));
            },
        ));
    }

    {
        let strip = Rc::clone(strip);
        let slider = slider.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "touchend",
            NON_PASSIVE,
            move |event: &Event| {
                let release = strip.borrow_mut().pointer_up(now_ms());
                if release.is_some_and(|release| release.tap) {
                    event.prevent_default();
                }
                set_grabbing(&slider, false);
            },
        ));
    }

    for link in links {
        install_link_guard(strip, link, &mut listeners);
    }

    log::debug!("installed {} listeners", listeners.len());
    Ok(listeners)
}

fn install_link_guard(
    strip: &Rc<RefCell<WebStrip>>,
    link: &HtmlAnchorElement,
    listeners: &mut Vec<EventListener>,
) {
    let guard = Rc::new(RefCell::new(strip.borrow().click_guard()));

    {
        let strip = Rc::clone(strip);
        let guard = Rc::clone(&guard);
        listeners.push(EventListener::new(link, "mousedown", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            strip.borrow_mut().press_link(
                &mut guard.borrow_mut(),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
        }));
    }

    {
        let strip = Rc::clone(strip);
        let guard = Rc::clone(&guard);
        listeners.push(EventListener::new(link, "touchstart", move |event| {
            let Some(touch) = event
                .dyn_ref::<TouchEvent>()
                .and_then(first_touch)
            else {
                return;
            };
            strip.borrow_mut().press_link(
                &mut guard.borrow_mut(),
                f64::from(touch.client_x()),
                f64::from(touch.client_y()),
            );
        }));
    }

    {
        let strip = Rc::clone(strip);
        listeners.push(EventListener::new_with_options(
            link,
            "click",
            NON_PASSIVE,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let suppress = strip.borrow().should_suppress_click(
                    &guard.borrow(),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                if suppress {
                    event.prevent_default();
                    event.stop_propagation();
                }
            },
        ));
    }
}
