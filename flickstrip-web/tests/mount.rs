#![cfg(target_arch = "wasm32")]
//! Browser tests. Touch cases construct `Touch` objects, which needs a
//! browser with touch events enabled (headless Chrome).

use std::cell::Cell;
use std::rc::Rc;

use flickstrip_core::StripConfig;
use flickstrip_web::{StripOptions, mount};
use gloo::events::EventListener;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit,
    Touch, TouchEvent, TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(slider_class: &str, content_id: &str) -> HtmlElement {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let slider: HtmlElement = document
        .create_element("div")
        .expect("create slider")
        .dyn_into()
        .expect("div is an HtmlElement");
    slider.set_class_name(slider_class);
    slider
        .style()
        .set_property("width", "200px")
        .expect("set width");
    slider
        .style()
        .set_property("overflow-x", "scroll")
        .expect("set overflow");
    let content = document.create_element("div").expect("create content");
    content.set_id(content_id);
    content
        .set_attribute("style", "display:flex;width:2000px;height:10px")
        .expect("set content style");
    slider.append_child(&content).expect("attach content");
    document
        .body()
        .expect("body available")
        .append_child(&slider)
        .expect("attach slider");
    slider
}

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn mouse_event(kind: &str, client_x: i32, client_y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect(kind)
}

/// Single-finger touch event aimed at `target`. `touchend` carries the
/// finger only in `changedTouches`.
fn touch_event(kind: &str, target: &EventTarget, client_x: f64) -> TouchEvent {
    let touch_init = TouchInit::new(1, target);
    touch_init.set_client_x(client_x);
    let touch = Touch::new(&touch_init).expect("touch");

    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let touches = if kind == "touchend" {
        Array::new()
    } else {
        Array::of1(&touch)
    };
    init.set_touches(&touches);
    init.set_changed_touches(&Array::of1(&touch));
    TouchEvent::new_with_event_init_dict(kind, &init).expect(kind)
}

fn first_link(content_id: &str) -> Element {
    document()
        .get_element_by_id(content_id)
        .expect("content present")
        .query_selector(".img-container a")
        .expect("query link")
        .expect("rendered link")
}

/// Records clicks that reach the document and cancels them so the test page
/// never navigates. Returns (seen, already prevented).
fn watch_document_clicks() -> (EventListener, Rc<Cell<bool>>, Rc<Cell<bool>>) {
    let seen = Rc::new(Cell::new(false));
    let prevented = Rc::new(Cell::new(false));
    let listener = {
        let seen = Rc::clone(&seen);
        let prevented = Rc::clone(&prevented);
        EventListener::new(&document(), "click", move |event| {
            seen.set(true);
            prevented.set(event.default_prevented());
            event.prevent_default();
        })
    };
    (listener, seen, prevented)
}

fn options(slider_class: &str, content_id: &str, total: usize) -> StripOptions {
    StripOptions {
        slider_selector: format!(".{slider_class}"),
        content_id: content_id.to_string(),
        total_slides: total,
        images: vec!["a.jpg".into(), "b.jpg".into()],
        config: StripConfig::default(),
    }
}

#[wasm_bindgen_test]
fn mount_renders_one_container_per_slide() {
    let slider = fixture("strip-render", "strip-render-content");
    let _handle =
        mount(options("strip-render", "strip-render-content", 4)).expect("mount");

    let containers = slider
        .query_selector_all(".container")
        .expect("query containers");
    assert_eq!(containers.length(), 4);
    let links = slider.query_selector_all(".img-container a").expect("query links");
    assert_eq!(links.length(), 2);
}

#[wasm_bindgen_test]
fn mount_fails_for_missing_content() {
    fixture("strip-missing", "strip-missing-content");
    let err = mount(options("strip-missing", "does-not-exist", 1))
        .expect_err("content id is wrong");
    assert!(err.as_string().unwrap_or_default().contains("does-not-exist"));
}

#[wasm_bindgen_test]
fn mouse_drag_scrolls_the_slider() {
    let slider = fixture("strip-drag", "strip-drag-content");
    let handle =
        mount(options("strip-drag", "strip-drag-content", 3)).expect("mount");
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let content = document
        .get_element_by_id("strip-drag-content")
        .expect("content present");

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(150);
    let down = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init)
        .expect("mousedown");
    content.dispatch_event(&down).expect("dispatch down");
    assert!(handle.is_dragging());
    assert!(slider.class_list().contains("grabbing"));

    init.set_client_x(110);
    let moved = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
        .expect("mousemove");
    document.dispatch_event(&moved).expect("dispatch move");
    assert_eq!(slider.scroll_left(), 40);

    let up = MouseEvent::new_with_mouse_event_init_dict("mouseup", &init)
        .expect("mouseup");
    document.dispatch_event(&up).expect("dispatch up");
    assert!(!handle.is_dragging());
    assert!(!slider.class_list().contains("grabbing"));
}

#[wasm_bindgen_test]
fn link_click_after_drag_is_cancelled_and_stopped() {
    fixture("strip-veto", "strip-veto-content");
    let handle =
        mount(options("strip-veto", "strip-veto-content", 2)).expect("mount");
    let link = first_link("strip-veto-content");
    let (_watch, seen, _) = watch_document_clicks();

    link.dispatch_event(&mouse_event("mousedown", 150, 5))
        .expect("dispatch down");
    document()
        .dispatch_event(&mouse_event("mousemove", 110, 5))
        .expect("dispatch move");
    document()
        .dispatch_event(&mouse_event("mouseup", 110, 5))
        .expect("dispatch up");
    assert!(!handle.is_dragging());

    let click = mouse_event("click", 110, 5);
    link.dispatch_event(&click).expect("dispatch click");
    assert!(click.default_prevented());
    assert!(!seen.get(), "vetoed click must not propagate");
}

#[wasm_bindgen_test]
fn link_click_without_travel_goes_through() {
    fixture("strip-click", "strip-click-content");
    let _handle =
        mount(options("strip-click", "strip-click-content", 2)).expect("mount");
    let link = first_link("strip-click-content");
    let (_watch, seen, prevented) = watch_document_clicks();

    link.dispatch_event(&mouse_event("mousedown", 150, 5))
        .expect("dispatch down");
    document()
        .dispatch_event(&mouse_event("mouseup", 151, 5))
        .expect("dispatch up");
    link.dispatch_event(&mouse_event("click", 151, 5))
        .expect("dispatch click");

    assert!(seen.get());
    assert!(!prevented.get());
}

#[wasm_bindgen_test]
fn touch_starting_on_a_link_does_not_drag() {
    let slider = fixture("strip-touch-link", "strip-touch-link-content");
    let handle = mount(options(
        "strip-touch-link",
        "strip-touch-link-content",
        2,
    ))
    .expect("mount");
    let link = first_link("strip-touch-link-content");

    let start = touch_event("touchstart", &link, 150.0);
    link.dispatch_event(&start).expect("dispatch touchstart");
    assert!(!handle.is_dragging());
    assert!(!start.default_prevented());
    assert!(!slider.class_list().contains("grabbing"));
}

#[wasm_bindgen_test]
fn quick_touch_tap_cancels_the_default_action() {
    let slider = fixture("strip-tap", "strip-tap-content");
    let handle =
        mount(options("strip-tap", "strip-tap-content", 2)).expect("mount");
    let content = document()
        .get_element_by_id("strip-tap-content")
        .expect("content present");

    content
        .dispatch_event(&touch_event("touchstart", &content, 150.0))
        .expect("dispatch touchstart");
    assert!(handle.is_dragging());
    assert!(slider.class_list().contains("grabbing"));

    let end = touch_event("touchend", &content, 150.0);
    content.dispatch_event(&end).expect("dispatch touchend");
    assert!(end.default_prevented());
    assert!(!handle.is_dragging());
}

#[wasm_bindgen_test]
fn touch_drag_scrolls_and_touchend_clears_grabbing() {
    let slider = fixture("strip-touch-drag", "strip-touch-drag-content");
    let handle = mount(options(
        "strip-touch-drag",
        "strip-touch-drag-content",
        3,
    ))
    .expect("mount");
    let content = document()
        .get_element_by_id("strip-touch-drag-content")
        .expect("content present");

    content
        .dispatch_event(&touch_event("touchstart", &content, 150.0))
        .expect("dispatch touchstart");
    assert!(slider.class_list().contains("grabbing"));

    let moved = touch_event("touchmove", &content, 110.0);
    content.dispatch_event(&moved).expect("dispatch touchmove");
    assert!(moved.default_prevented());
    assert_eq!(slider.scroll_left(), 40);

    content
        .dispatch_event(&touch_event("touchend", &content, 110.0))
        .expect("dispatch touchend");
    assert!(!handle.is_dragging());
    assert!(!slider.class_list().contains("grabbing"));
}
