//! Domain logic for the GameShop storefront enhancement layer.
//!
//! This crate holds everything the browser layer computes but the browser
//! does not own:
//!
//! - **Config**: the typed page contract — every selector, class name,
//!   element id, data attribute and timer duration the layer recognizes
//! - **Strength**: password-strength scoring and tier mapping
//! - **Money**: price-text parsing and locale currency formatting
//! - **Validation**: required-field assessment for submit attempts
//! - **Datetime**: long-form locale date rendering
//! - **Toast**: notification categories and their fixed timeline
//!
//! Nothing here touches the DOM; the crate compiles and tests on any
//! target. The `enhance-web` crate wires these types to `web-sys`.
//!
//! # Example
//!
//! ```rust
//! use enhance_core::prelude::*;
//!
//! let report = score_password("Tr0ub4dor&3");
//! assert_eq!(report.score, 5);
//! assert_eq!(report.tier, StrengthTier::Excellent);
//!
//! let formatted = localize_price_text("1234.5", Currency::RUB).unwrap();
//! assert_eq!(formatted, "1\u{a0}234,50\u{a0}\u{20bd}");
//! ```

pub mod config;
pub mod datetime;
pub mod error;
pub mod money;
pub mod strength;
pub mod toast;
pub mod validation;

pub use config::EnhanceConfig;
pub use error::EnhanceError;
pub use money::{localize_price_text, Currency, Money};
pub use strength::{score_password, StrengthReport, StrengthTier};
pub use toast::{ToastKind, ToastTimeline};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ClassNames, ElementIds, EnhanceConfig, Selectors, Timers};
    pub use crate::datetime::format_long_ru;
    pub use crate::error::EnhanceError;
    pub use crate::money::{localize_price_text, parse_price_text, Currency, Money};
    pub use crate::strength::{score_password, StrengthReport, StrengthTier};
    pub use crate::toast::{ToastKind, ToastTimeline};
    pub use crate::validation::{assess_required, FieldOutcome, FormReport};
}
