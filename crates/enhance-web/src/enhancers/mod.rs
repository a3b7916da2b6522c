//! The independent page enhancers.
//!
//! Each module exposes one `install` function taking the document and the
//! page contract. Installers are order-independent: every enhancer owns a
//! disjoint set of nodes it reads or creates, and a missing target
//! resolves to a no-op rather than an error.

pub(crate) mod buttons;
pub(crate) mod clipboard;
pub(crate) mod flash;
pub(crate) mod forms;
pub(crate) mod menu;
pub(crate) mod prices;
pub(crate) mod scroll;
pub(crate) mod strength;
