//! Sliding toast notifications.
//!
//! Each call owns its node and timers; concurrent toasts stack without
//! any queue or dedup. Timeline: created off-screen, slid into view after
//! a short delay, slid back out after the dwell, removed once the exit
//! transition has had time to finish.

use crate::dom;
use crate::markup;
use crate::schedule::ScheduledTask;
use enhance_core::config::ClassNames;
use enhance_core::toast::{ToastKind, ToastTimeline};
use enhance_core::EnhanceError;
use web_sys::Document;

/// Create, animate and eventually remove one toast.
pub(crate) fn show_sliding_toast(
    document: &Document,
    kind: ToastKind,
    message: &str,
    classes: &ClassNames,
    timeline: ToastTimeline,
) -> Result<(), EnhanceError> {
    let toast = document
        .create_element("div")
        .map_err(|err| dom::js_error("create toast", err))?;
    toast.set_class_name(&format!(
        "fixed top-4 right-4 {} text-white p-4 rounded-lg shadow-lg z-50 transform {} transition-transform duration-300",
        kind.background_class(),
        classes.toast_offscreen,
    ));
    toast.set_inner_html(&markup::toast_body(kind, message));

    let body = document
        .body()
        .ok_or_else(|| EnhanceError::ContextUnavailable("no body".to_string()))?;
    body.append_child(&toast)
        .map_err(|err| dom::js_error("append toast", err))?;

    let offscreen = classes.toast_offscreen.clone();

    // Enter: drop the off-screen transform shortly after insertion so the
    // transition has a starting frame to animate from.
    let enter_target = toast.clone();
    let enter_class = offscreen.clone();
    ScheduledTask::after(timeline.enter_delay, move || {
        let _ = enter_target.class_list().remove_1(&enter_class);
    })
    .forget();

    // Exit and removal, both guarded: the node may already be gone.
    let exit_target = toast.clone();
    let exit_delay = timeline.exit;
    ScheduledTask::after(timeline.dwell, move || {
        let _ = exit_target.class_list().add_1(&offscreen);
        let remove_target = exit_target.clone();
        ScheduledTask::after(exit_delay, move || {
            if remove_target.parent_node().is_some() {
                remove_target.remove();
            }
        })
        .forget();
    })
    .forget();

    Ok(())
}
