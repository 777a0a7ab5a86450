//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `modal`, `contact`, `reveal`) so each
//! component depends on a small focused model that tests can drive without a
//! browser.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod section;
