//! The password-strength meter.
//!
//! Bound to the designated password input when the page has one. The
//! indicator node is created once at install; every input event rescores
//! the current value and re-renders the bar and label.

use crate::dom;
use crate::markup;
use enhance_core::strength::score_password;
use enhance_core::{EnhanceConfig, EnhanceError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let Some(element) = document.get_element_by_id(&config.ids.password_input) else {
        return Ok(());
    };
    let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
        return Ok(());
    };

    let indicator = document
        .create_element("div")
        .map_err(|err| dom::js_error("create strength indicator", err))?;
    indicator.set_class_name(&format!("{} mt-2", config.classes.strength_indicator));
    if let Some(parent) = input.parent_node() {
        parent
            .append_child(&indicator)
            .map_err(|err| dom::js_error("attach strength indicator", err))?;
    }

    let value_source = input.clone();
    dom::on_event(&input, "input", move |_event| {
        let report = score_password(&value_source.value());
        indicator.set_inner_html(&markup::strength_indicator_body(&report));
    })
}
