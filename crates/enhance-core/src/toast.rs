//! Toast categories and their fixed timeline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Category of a toast message, mapped to a fixed color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Neutral information (blue).
    #[default]
    Info,
    /// Confirmation of a completed action (green).
    Success,
    /// A blocked or failed action (red).
    Error,
    /// A caution that does not block (yellow).
    Warning,
}

impl ToastKind {
    /// Resolve a category name; unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    /// Background utility class for the toast container.
    pub fn background_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "bg-blue-500",
            ToastKind::Success => "bg-green-500",
            ToastKind::Error => "bg-red-500",
            ToastKind::Warning => "bg-yellow-500",
        }
    }

    /// Icon class rendered before the message.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-triangle",
            ToastKind::Info | ToastKind::Warning => "fa-info-circle",
        }
    }
}

/// The fixed lifecycle of a sliding toast: created off-screen, slid into
/// view after a short delay, held, slid back out, then removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastTimeline {
    /// Delay before the enter slide starts.
    pub enter_delay: Duration,
    /// Dwell from creation until the exit slide starts.
    pub dwell: Duration,
    /// Length of the exit slide; removal follows it.
    pub exit: Duration,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(100),
            dwell: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

impl ToastTimeline {
    /// Total time from creation to removal.
    pub fn total(&self) -> Duration {
        self.dwell + self.exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(ToastKind::from_name("success"), ToastKind::Success);
        assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
        assert_eq!(ToastKind::from_name("warning"), ToastKind::Warning);
        assert_eq!(ToastKind::from_name("info"), ToastKind::Info);
        assert_eq!(ToastKind::from_name("whatever"), ToastKind::Info);
    }

    #[test]
    fn test_background_classes() {
        assert_eq!(ToastKind::Success.background_class(), "bg-green-500");
        assert_eq!(ToastKind::Error.background_class(), "bg-red-500");
        assert_eq!(ToastKind::Warning.background_class(), "bg-yellow-500");
        assert_eq!(ToastKind::Info.background_class(), "bg-blue-500");
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(ToastKind::Success.icon_class(), "fa-check-circle");
        assert_eq!(ToastKind::Error.icon_class(), "fa-exclamation-triangle");
        assert_eq!(ToastKind::Info.icon_class(), "fa-info-circle");
    }

    #[test]
    fn test_default_timeline() {
        let timeline = ToastTimeline::default();
        assert_eq!(timeline.enter_delay, Duration::from_millis(100));
        assert_eq!(timeline.dwell, Duration::from_secs(3));
        assert_eq!(timeline.exit, Duration::from_millis(300));
        assert_eq!(timeline.total(), Duration::from_millis(3300));
    }
}
