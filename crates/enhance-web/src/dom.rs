//! Thin helpers over `web-sys` shared by the enhancers.

use enhance_core::EnhanceError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

/// The browser window, or an error the embedder can surface.
pub(crate) fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or_else(|| EnhanceError::ContextUnavailable("no window".to_string()))
}

/// The page document.
pub(crate) fn document() -> Result<Document, EnhanceError> {
    window()?
        .document()
        .ok_or_else(|| EnhanceError::ContextUnavailable("no document".to_string()))
}

/// Convert a caught `JsValue` into an [`EnhanceError`] with context.
pub(crate) fn js_error(context: &str, value: JsValue) -> EnhanceError {
    EnhanceError::Dom(format!("{context}: {value:?}"))
}

/// Collect every element matching `selector` under `document`.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| js_error(selector, err))?;
    Ok(elements_of(&nodes))
}

/// Collect every element matching `selector` under `root`.
pub(crate) fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|err| js_error(selector, err))?;
    Ok(elements_of(&nodes))
}

fn elements_of(nodes: &web_sys::NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    elements
}

/// Attach a named event handler for the lifetime of the page.
///
/// The closure is leaked intentionally; enhancers install once per page
/// load and the page owns the listener from then on.
pub(crate) fn on_event(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), EnhanceError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|err| js_error(kind, err))?;
    closure.forget();
    Ok(())
}

/// Attach a click handler for the lifetime of the page.
pub(crate) fn on_click(
    target: &EventTarget,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), EnhanceError> {
    on_event(target, "click", handler)
}
