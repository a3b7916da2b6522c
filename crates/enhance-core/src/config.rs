//! The typed page contract.
//!
//! The markup this layer enhances is rendered by the backend; the only
//! coupling between the two sides is a set of selectors, class names,
//! element ids, one data attribute and a handful of timer durations.
//! `EnhanceConfig` names all of them in one place instead of scattering
//! string literals through the handlers. `Default` reproduces the
//! storefront page contract exactly.

use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CSS selectors the layer queries at install time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// Flash message elements dismissed after the display window.
    pub alert: String,
    /// In-page anchors eligible for smooth scrolling.
    pub fragment_anchor: String,
    /// Forms receiving the custom required-field check.
    pub form: String,
    /// Required fields within a form.
    pub required_field: String,
    /// Elements whose text is a raw price to locale-format.
    pub price: String,
    /// Submit buttons that show a loading state.
    pub submit_button: String,
    /// Copy-to-clipboard trigger buttons.
    pub copy_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            alert: ".alert".to_string(),
            fragment_anchor: r##"a[href^="#"]"##.to_string(),
            form: "form".to_string(),
            required_field: "[required]".to_string(),
            price: ".price".to_string(),
            submit_button: r#"button[type="submit"]"#.to_string(),
            copy_button: ".copy-btn".to_string(),
        }
    }
}

/// Element ids looked up individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    /// The password input the strength meter binds to.
    pub password_input: String,
    /// The mobile-menu toggle button.
    pub menu_button: String,
    /// The mobile-menu panel.
    pub menu_panel: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            password_input: "password".to_string(),
            menu_button: "mobile-menu-button".to_string(),
            menu_panel: "mobile-menu".to_string(),
        }
    }
}

/// Class names the layer applies, removes or toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    /// Marks an invalid required field.
    pub field_error: String,
    /// Identifies an inserted field error message.
    pub error_message: String,
    /// Visibility class toggled on the mobile-menu panel.
    pub hidden: String,
    /// Success background applied to a copy button while confirming.
    pub copy_success: String,
    /// Container class of the strength indicator node.
    pub strength_indicator: String,
    /// Off-screen transform a sliding toast starts from.
    pub toast_offscreen: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            field_error: "border-red-500".to_string(),
            error_message: "error-message".to_string(),
            hidden: "hidden".to_string(),
            copy_success: "bg-green-500".to_string(),
            strength_indicator: "password-strength".to_string(),
            toast_offscreen: "translate-x-full".to_string(),
        }
    }
}

/// Timer durations. All timers are single-shot and best-effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timers {
    /// How long flash messages stay fully visible.
    pub flash_display: Duration,
    /// Length of the flash opacity fade; removal follows it.
    pub flash_fade: Duration,
    /// Delay before a sliding toast moves into view.
    pub toast_enter_delay: Duration,
    /// How long a toast dwells before sliding back out.
    pub toast_dwell: Duration,
    /// Length of the toast exit slide; removal follows it.
    pub toast_exit: Duration,
    /// How long a copy button shows its confirmation state.
    pub copy_confirm: Duration,
}

impl Default for Timers {
    fn default() -> Self {
        Self {
            flash_display: Duration::from_millis(5000),
            flash_fade: Duration::from_millis(500),
            toast_enter_delay: Duration::from_millis(100),
            toast_dwell: Duration::from_millis(3000),
            toast_exit: Duration::from_millis(300),
            copy_confirm: Duration::from_millis(2000),
        }
    }
}

/// Full configuration for one installation of the layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceConfig {
    /// Selectors queried at install time.
    pub selectors: Selectors,
    /// Ids looked up individually.
    pub ids: ElementIds,
    /// Class names applied or toggled.
    pub classes: ClassNames,
    /// Timer durations.
    pub timers: Timers,
    /// Currency used when localizing price text.
    pub currency: Currency,
    /// Attribute holding the text a copy button copies.
    pub copy_attribute: String,
}

impl EnhanceConfig {
    /// Create the default storefront configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency used for price localization.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Override the timer durations.
    pub fn with_timers(mut self, timers: Timers) -> Self {
        self.timers = timers;
        self
    }
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            timers: Timers::default(),
            currency: Currency::RUB,
            copy_attribute: "data-copy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_match_page_contract() {
        let selectors = Selectors::default();
        assert_eq!(selectors.alert, ".alert");
        assert_eq!(selectors.fragment_anchor, r##"a[href^="#"]"##);
        assert_eq!(selectors.required_field, "[required]");
        assert_eq!(selectors.price, ".price");
        assert_eq!(selectors.submit_button, r#"button[type="submit"]"#);
        assert_eq!(selectors.copy_button, ".copy-btn");
    }

    #[test]
    fn test_default_ids_match_page_contract() {
        let ids = ElementIds::default();
        assert_eq!(ids.password_input, "password");
        assert_eq!(ids.menu_button, "mobile-menu-button");
        assert_eq!(ids.menu_panel, "mobile-menu");
    }

    #[test]
    fn test_default_timers() {
        let timers = Timers::default();
        assert_eq!(timers.flash_display, Duration::from_secs(5));
        assert_eq!(timers.flash_fade, Duration::from_millis(500));
        assert_eq!(timers.toast_enter_delay, Duration::from_millis(100));
        assert_eq!(timers.toast_dwell, Duration::from_secs(3));
        assert_eq!(timers.toast_exit, Duration::from_millis(300));
        assert_eq!(timers.copy_confirm, Duration::from_secs(2));
    }

    #[test]
    fn test_config_builders() {
        let config = EnhanceConfig::new().with_currency(Currency::USD);
        assert_eq!(config.currency, Currency::USD);

        let timers = Timers {
            flash_display: Duration::from_secs(1),
            ..Timers::default()
        };
        let config = config.with_timers(timers);
        assert_eq!(config.timers.flash_display, Duration::from_secs(1));
    }

    #[test]
    fn test_default_copy_attribute_and_currency() {
        let config = EnhanceConfig::default();
        assert_eq!(config.copy_attribute, "data-copy");
        assert_eq!(config.currency, Currency::RUB);
    }

    #[test]
    fn test_config_round_trips_through_serde() {
        let config = EnhanceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EnhanceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
