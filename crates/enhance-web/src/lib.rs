//! Browser bindings for the GameShop storefront enhancement layer.
//!
//! Compiled to `wasm32-unknown-unknown` and loaded by the storefront
//! shell, this crate attaches the one-shot behaviors the page expects:
//!
//! - flash message auto-dismissal
//! - smooth scrolling for in-page anchors
//! - required-field validation with toast feedback
//! - the password-strength meter
//! - locale price formatting
//! - the mobile-menu toggle
//! - submit-button loading states
//! - copy-to-clipboard confirmation
//! - the exported `formatDate` / `showNotification` / `confirmAction`
//!   utilities
//!
//! The entry point is [`enhance`], called once by the loading script; it
//! defers installation until the document is interactive. All decisions
//! (scores, formats, messages, the page contract itself) live in
//! `enhance-core`; this crate only wires them to the DOM, which is why
//! everything DOM-shaped is gated on `wasm32` while the markup builders
//! compile and test anywhere.

pub mod markup;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod enhancers;
#[cfg(target_arch = "wasm32")]
pub mod schedule;
#[cfg(target_arch = "wasm32")]
mod toast;
#[cfg(target_arch = "wasm32")]
mod utils;

#[cfg(target_arch = "wasm32")]
pub use schedule::ScheduledTask;
#[cfg(target_arch = "wasm32")]
pub use utils::{confirm_action, format_date, show_notification};

#[cfg(target_arch = "wasm32")]
use enhance_core::{EnhanceConfig, EnhanceError};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Install every enhancer once the document is interactive.
///
/// Safe to call from a module script that runs before `DOMContentLoaded`:
/// installation is deferred until the document has finished parsing.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn enhance() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::document().map_err(to_js)?;
    if document.ready_state() == web_sys::DocumentReadyState::Loading {
        let deferred = Closure::once(|| {
            if let Err(err) = install_all() {
                tracing::error!("enhancement install failed: {err}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.as_ref().unchecked_ref())
            .map_err(|err| JsValue::from_str(&format!("{err:?}")))?;
        deferred.forget();
    } else {
        install_all().map_err(to_js)?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn install_all() -> Result<(), EnhanceError> {
    let document = dom::document()?;
    let config = EnhanceConfig::default();

    enhancers::flash::install(&document, &config)?;
    enhancers::scroll::install(&document, &config)?;
    enhancers::forms::install(&document, &config)?;
    enhancers::strength::install(&document, &config)?;
    enhancers::prices::install(&document, &config)?;
    enhancers::menu::install(&document, &config)?;
    enhancers::buttons::install(&document, &config)?;
    enhancers::clipboard::install(&document, &config)?;

    web_sys::console::log_1(&"GameShop enhancements loaded 🎮".into());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn to_js(err: EnhanceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
