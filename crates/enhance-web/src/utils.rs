//! Page-facing utility exports.
//!
//! The page-script surface of the layer: date formatting, toast
//! notifications and the blocking confirm dialog, exported under the
//! names page code already calls.

use crate::{dom, toast};
use enhance_core::config::ClassNames;
use enhance_core::datetime::format_long_ru;
use enhance_core::toast::{ToastKind, ToastTimeline};
use wasm_bindgen::prelude::*;

/// Prompt used when a confirm call passes no message.
const DEFAULT_CONFIRM_PROMPT: &str = "Вы уверены, что хотите выполнить это действие?";

/// Format an ISO-like date string as a long-form locale date with time.
/// Unrecognized input is returned unchanged.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    format_long_ru(value).unwrap_or_else(|_| value.to_string())
}

/// Show a sliding toast. `kind` is one of "info", "success", "error",
/// "warning"; anything else (or nothing) means "info". Concurrent calls
/// stack independently.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = ToastKind::from_name(kind.as_deref().unwrap_or("info"));
    let Ok(document) = dom::document() else {
        return;
    };
    if let Err(err) = toast::show_sliding_toast(
        &document,
        kind,
        message,
        &ClassNames::default(),
        ToastTimeline::default(),
    ) {
        tracing::warn!("notification dropped: {err}");
    }
}

/// Blocking yes/no prompt. Returns `false` when the dialog cannot be
/// shown at all.
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: Option<String>) -> bool {
    let prompt = message.unwrap_or_else(|| DEFAULT_CONFIRM_PROMPT.to_string());
    dom::window()
        .ok()
        .and_then(|window| window.confirm_with_message(&prompt).ok())
        .unwrap_or(false)
}
