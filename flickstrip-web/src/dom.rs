//! Slide container construction

use flickstrip_core::Slide;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlImageElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Append one container per slide to `content` and return the image links,
/// in slide order, so the caller can attach click guards to them.
pub(crate) fn render_slides(
    document: &Document,
    content: &Element,
    slides: &[Slide],
) -> Result<Vec<HtmlAnchorElement>, JsValue> {
    let mut links = Vec::new();
    for slide in slides {
        let container = document.create_element("div")?;
        container.set_class_name("container");
        let overlay = number_overlay(document, slide.number)?;
        container.append_child(&overlay)?;

        let img_container = document.create_element("div")?;
        img_container.set_class_name("img-container");
        if let Some(src) = slide.image.as_deref() {
            let link: HtmlAnchorElement =
                document.create_element("a")?.dyn_into()?;
            link.set_href("#");
            let img: HtmlImageElement =
                document.create_element("img")?.dyn_into()?;
            img.set_src(src);
            link.append_child(&img)?;
            img_container.append_child(&link)?;
            links.push(link);
        }

        container.append_child(&img_container)?;
        content.append_child(&container)?;
    }
    log::debug!(
        "rendered {} slides ({} linked)",
        slides.len(),
        links.len()
    );
    Ok(links)
}

/// Numbered SVG overlay; presentation is left to the stylesheet.
fn number_overlay(document: &Document, number: u32) -> Result<Element, JsValue> {
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("class", "svg-overlay")?;
    svg.set_attribute("viewBox", "0 0 100 100")?;
    svg.set_attribute("preserveAspectRatio", "xMidYMid meet")?;

    let text = document.create_element_ns(Some(SVG_NS), "text")?;
    text.set_attribute("x", "50")?;
    text.set_attribute("y", "60")?;
    text.set_attribute("text-anchor", "middle")?;
    text.set_attribute("dominant-baseline", "middle")?;
    text.set_text_content(Some(&number.to_string()));
    svg.append_child(&text)?;
    Ok(svg)
}
