//! Smooth scrolling for in-page anchors.

use crate::dom;
use enhance_core::{EnhanceConfig, EnhanceError};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    for anchor in dom::query_all(document, &config.selectors.fragment_anchor)? {
        install_anchor(document.clone(), anchor)?;
    }
    Ok(())
}

/// Intercept clicks on one fragment anchor. The default jump is always
/// prevented; an unknown fragment is silently swallowed.
fn install_anchor(document: Document, anchor: Element) -> Result<(), EnhanceError> {
    let href_source = anchor.clone();
    dom::on_click(&anchor, move |event| {
        event.prevent_default();
        let Some(href) = href_source.get_attribute("href") else {
            return;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };
        if fragment.is_empty() {
            return;
        }
        if let Some(target) = document.get_element_by_id(fragment) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}
