//! Flash message auto-dismissal.
//!
//! One timer covers every alert present at install time: after the
//! display window each alert fades over the configured transition, then
//! is detached once the fade has had time to complete. Alerts rendered
//! later are not picked up; the server only flashes on full page loads.

use crate::dom;
use crate::schedule::ScheduledTask;
use enhance_core::{EnhanceConfig, EnhanceError};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    let alerts = dom::query_all(document, &config.selectors.alert)?;
    if alerts.is_empty() {
        return Ok(());
    }

    tracing::debug!(count = alerts.len(), "scheduling flash dismissal");
    let fade = config.timers.flash_fade;
    ScheduledTask::after(config.timers.flash_display, move || {
        for alert in alerts {
            dismiss_alert(alert, fade);
        }
    })
    .forget();
    Ok(())
}

/// Fade one alert out, then detach it if it is still in the tree.
fn dismiss_alert(alert: Element, fade: Duration) {
    let Ok(alert) = alert.dyn_into::<HtmlElement>() else {
        return;
    };

    let style = alert.style();
    let _ = style.set_property(
        "transition",
        &format!("opacity {}ms ease-in-out", fade.as_millis()),
    );
    let _ = style.set_property("opacity", "0");

    ScheduledTask::after(fade, move || {
        if let Some(parent) = alert.parent_node() {
            let _ = parent.remove_child(&alert);
        }
    })
    .forget();
}
