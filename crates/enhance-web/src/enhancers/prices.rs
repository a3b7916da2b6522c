//! One-shot price localization.
//!
//! Runs once at install over every marked element; content that changes
//! later is not re-formatted. Unparseable text is left untouched.

use crate::dom;
use enhance_core::money::{localize_price_text, Currency};
use enhance_core::{EnhanceConfig, EnhanceError};
use web_sys::{Document, Element};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    for element in dom::query_all(document, &config.selectors.price)? {
        localize_element(&element, config.currency);
    }
    Ok(())
}

fn localize_element(element: &Element, currency: Currency) {
    let text = element.text_content().unwrap_or_default();
    if let Some(formatted) = localize_price_text(&text, currency) {
        element.set_text_content(Some(&formatted));
    }
}
