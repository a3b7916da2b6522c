//! Copy-to-clipboard buttons.
//!
//! The copy itself is asynchronous; on success the button shows a
//! transient confirmation and restores its original content afterwards.
//! A rejected write is logged and otherwise dropped — the page defines
//! no user-visible failure state.

use crate::dom;
use crate::markup;
use crate::schedule::ScheduledTask;
use enhance_core::{EnhanceConfig, EnhanceError};
use std::time::Duration;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    for button in dom::query_all(document, &config.selectors.copy_button)? {
        install_button(button, config)?;
    }
    Ok(())
}

fn install_button(button: Element, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let attribute = config.copy_attribute.clone();
    let success_class = config.classes.copy_success.clone();
    let confirm_for = config.timers.copy_confirm;
    let source = button.clone();
    dom::on_click(&button, move |_event| {
        let Some(text) = source.get_attribute(&attribute) else {
            return;
        };
        copy_with_confirmation(source.clone(), text, success_class.clone(), confirm_for);
    })
}

fn copy_with_confirmation(
    button: Element,
    text: String,
    success_class: String,
    confirm_for: Duration,
) {
    let Ok(window) = dom::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => show_confirmation(button, success_class, confirm_for),
            Err(err) => {
                // No user-visible failure state is defined for the page;
                // keep the rejection observable in diagnostics only.
                let err = EnhanceError::Clipboard(format!("{err:?}"));
                tracing::warn!("{err}");
            }
        }
    });
}

/// Swap to the confirmation state, then restore the original content.
fn show_confirmation(button: Element, success_class: String, confirm_for: Duration) {
    let original = button.inner_html();
    button.set_inner_html(&markup::copy_confirmation_content());
    let _ = button.class_list().add_1(&success_class);

    ScheduledTask::after(confirm_for, move || {
        button.set_inner_html(&original);
        let _ = button.class_list().remove_1(&success_class);
    })
    .forget();
}
