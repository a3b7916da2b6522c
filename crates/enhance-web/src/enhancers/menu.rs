//! Mobile-menu visibility toggle.

use crate::dom;
use enhance_core::{EnhanceConfig, EnhanceError};
use web_sys::Document;

/// Installs only when both the toggle button and the panel exist.
pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let Some(button) = document.get_element_by_id(&config.ids.menu_button) else {
        return Ok(());
    };
    let Some(panel) = document.get_element_by_id(&config.ids.menu_panel) else {
        return Ok(());
    };

    let hidden = config.classes.hidden.clone();
    dom::on_click(&button, move |_event| {
        let _ = panel.class_list().toggle(&hidden);
    })
}
