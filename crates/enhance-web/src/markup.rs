//! HTML fragments the layer injects.
//!
//! Every node the enhancers create gets its inner markup from one of
//! these builders. Message text is escaped before interpolation; the
//! server-rendered page never was, and these fragments keep that
//! boundary intact even for strings arriving from page scripts.

use enhance_core::strength::StrengthReport;
use enhance_core::toast::ToastKind;

/// Label shown inside a submit button while the form is processing.
pub const PROCESSING_LABEL: &str = "Обработка...";

/// Label shown inside a copy button after a successful copy.
pub const COPIED_LABEL: &str = "Скопировано!";

/// Escape text for interpolation into an HTML fragment.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inner markup of a sliding toast: category icon plus message row.
pub fn toast_body(kind: ToastKind, message: &str) -> String {
    format!(
        r#"<div class="flex items-center"><i class="fas {} mr-2"></i><span>{}</span></div>"#,
        kind.icon_class(),
        escape_html(message)
    )
}

/// Inner markup of the blocked-submit notification.
pub fn form_error_body(message: &str) -> String {
    format!(
        r#"<div class="flex items-center"><i class="fas fa-exclamation-triangle mr-2"></i><span>{}</span></div>"#,
        escape_html(message)
    )
}

/// Replacement content of a submit button while processing.
pub fn spinner_content() -> String {
    format!(r#"<i class="fas fa-spinner fa-spin mr-2"></i>{PROCESSING_LABEL}"#)
}

/// Replacement content of a copy button after a successful copy.
pub fn copy_confirmation_content() -> String {
    format!(r#"<i class="fas fa-check mr-2"></i>{COPIED_LABEL}"#)
}

/// Inner markup of the strength indicator: proportional bar plus a
/// tier-colored label.
pub fn strength_indicator_body(report: &StrengthReport) -> String {
    let color = report.tier.color();
    format!(
        concat!(
            r#"<div class="flex items-center">"#,
            r#"<div class="w-full bg-gray-200 rounded-full h-2 mr-3">"#,
            r#"<div class="h-2 rounded-full bg-{color}-500" style="width: {width}%"></div>"#,
            r#"</div>"#,
            r#"<span class="text-sm text-{color}-600 font-semibold">{label}</span>"#,
            r#"</div>"#
        ),
        color = color,
        width = report.bar_width_percent(),
        label = report.tier.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use enhance_core::strength::score_password;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>&"quotes"'</b>"#),
            "&lt;b&gt;&amp;&quot;quotes&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("обычный текст"), "обычный текст");
    }

    #[test]
    fn test_toast_body_uses_kind_icon() {
        let body = toast_body(ToastKind::Success, "Готово");
        assert!(body.contains("fa-check-circle"));
        assert!(body.contains("Готово"));

        let body = toast_body(ToastKind::Error, "Ошибка");
        assert!(body.contains("fa-exclamation-triangle"));
    }

    #[test]
    fn test_toast_body_escapes_message() {
        let body = toast_body(ToastKind::Info, "<script>alert(1)</script>");
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_spinner_and_copy_content() {
        assert!(spinner_content().contains("fa-spinner fa-spin"));
        assert!(spinner_content().contains(PROCESSING_LABEL));
        assert!(copy_confirmation_content().contains("fa-check"));
        assert!(copy_confirmation_content().contains(COPIED_LABEL));
    }

    #[test]
    fn test_strength_indicator_reflects_report() {
        let report = score_password("aB1!aB1!");
        let body = strength_indicator_body(&report);
        assert!(body.contains("width: 100%"));
        assert!(body.contains("bg-green-500"));
        assert!(body.contains("text-green-600"));
        assert!(body.contains("Отличный пароль!"));

        let report = score_password("");
        let body = strength_indicator_body(&report);
        assert!(body.contains("width: 0%"));
        assert!(body.contains("bg-red-500"));
        assert!(body.contains("Слабый пароль"));
    }
}
