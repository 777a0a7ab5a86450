//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod clock_nav;
pub mod contact_form;
pub mod modal;
pub mod navbar;
pub mod page_section;
