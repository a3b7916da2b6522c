//! Custom required-field validation on submit.
//!
//! Every submit attempt re-assesses each `[required]` field from
//! scratch: empty fields gain the error class and an inserted message,
//! filled fields are cleared. Any empty field blocks submission and
//! raises the fixed error notification.
//!
//! The duplicate-message check only inspects the element immediately
//! following the field, while the message itself is appended to the end
//! of the field's parent. The two agree on the common markup (field last
//! in its wrapper) and drift apart otherwise; kept as the page has
//! always behaved.

use crate::dom;
use crate::markup;
use crate::schedule::ScheduledTask;
use enhance_core::validation::{
    assess_required, FieldOutcome, FormReport, FIELD_REQUIRED_MESSAGE, FORM_INVALID_MESSAGE,
};
use enhance_core::{EnhanceConfig, EnhanceError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub(crate) fn install(document: &Document, config: &EnhanceConfig) -> Result<(), EnhanceError> {
    for form in dom::query_all(document, &config.selectors.form)? {
        install_form(document.clone(), form, config.clone())?;
    }
    Ok(())
}

fn install_form(
    document: Document,
    form: Element,
    config: EnhanceConfig,
) -> Result<(), EnhanceError> {
    let assessed = form.clone();
    dom::on_event(&form, "submit", move |event| {
        let report = annotate_form(&document, &assessed, &config);
        if !report.is_valid() {
            event.prevent_default();
            tracing::debug!(
                missing = report.missing_count(),
                total = report.field_count(),
                "submit blocked"
            );
            show_blocked_notification(&document, &config);
        }
    })
}

/// Assess every required field and sync its annotation with the outcome.
fn annotate_form(document: &Document, form: &Element, config: &EnhanceConfig) -> FormReport {
    let mut report = FormReport::default();
    let fields = dom::query_all_within(form, &config.selectors.required_field).unwrap_or_default();
    for field in fields {
        let outcome = assess_required(&field_value(&field));
        report.record(outcome);
        match outcome {
            FieldOutcome::Missing => mark_invalid(document, &field, config),
            FieldOutcome::Filled => clear_invalid(&field, config),
        }
    }
    report
}

/// Current value of a required field, whatever control it is.
fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn mark_invalid(document: &Document, field: &Element, config: &EnhanceConfig) {
    let _ = field.class_list().add_1(&config.classes.field_error);

    let already_present = field
        .next_element_sibling()
        .is_some_and(|sibling| sibling.class_list().contains(&config.classes.error_message));
    if already_present {
        return;
    }

    let Ok(message) = document.create_element("p") else {
        return;
    };
    message.set_class_name(&format!(
        "{} text-red-500 text-sm mt-1",
        config.classes.error_message
    ));
    message.set_text_content(Some(FIELD_REQUIRED_MESSAGE));
    if let Some(parent) = field.parent_node() {
        let _ = parent.append_child(&message);
    }
}

fn clear_invalid(field: &Element, config: &EnhanceConfig) {
    let _ = field.class_list().remove_1(&config.classes.field_error);
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(message)) =
            parent.query_selector(&format!(".{}", config.classes.error_message))
        {
            message.remove();
        }
    }
}

/// The blocked-submit notification: fixed red toast, no slide, removed
/// after the dwell.
fn show_blocked_notification(document: &Document, config: &EnhanceConfig) {
    let Ok(notification) = document.create_element("div") else {
        return;
    };
    notification
        .set_class_name("fixed top-4 right-4 bg-red-500 text-white p-4 rounded-lg shadow-lg z-50");
    notification.set_inner_html(&markup::form_error_body(FORM_INVALID_MESSAGE));

    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&notification).is_err() {
        return;
    }

    ScheduledTask::after(config.timers.toast_dwell, move || {
        notification.remove();
    })
    .forget();
}
