//! Error types for the enhancement layer.

use thiserror::Error;

/// Errors that can occur while installing or running enhancers.
///
/// Most runtime conditions the layer meets (missing element, unparseable
/// price text) resolve to guarded no-ops per the page contract and never
/// reach this enum; these variants cover the failures an embedder should
/// actually see.
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// Browser window or document unavailable.
    #[error("Browser context unavailable: {0}")]
    ContextUnavailable(String),

    /// A DOM operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// A date string did not match any accepted format.
    #[error("Unrecognized date format: {0}")]
    DateParse(String),

    /// The asynchronous clipboard write was rejected.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
}
