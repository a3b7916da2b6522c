//! Submit-button loading states.
//!
//! Relies on native constraint validation, not the custom required-field
//! check in `forms`: the browser's verdict decides whether the button
//! locks into its processing state. The two checks can disagree on
//! pattern mismatches; kept uncoordinated as the page has always been.

use crate::dom;
use crate::markup;
use enhance_core::{EnhanceConfig, EnhanceError};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    for element in dom::query_all(document, &config.selectors.submit_button)? {
        if let Ok(button) = element.dyn_into::<HtmlButtonElement>() {
            install_button(button)?;
        }
    }
    Ok(())
}

/// Swap to a spinner and disable once the owning form reports valid.
fn install_button(button: HtmlButtonElement) -> Result<(), EnhanceError> {
    let locked = button.clone();
    dom::on_click(&button, move |_event| {
        let Some(form) = locked.form() else {
            return;
        };
        if form.check_validity() {
            locked.set_inner_html(&markup::spinner_content());
            locked.set_disabled(true);
        }
    })
}
