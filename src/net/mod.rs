//! Networking modules.
//!
//! `email` delivers contact-form messages to the EmailJS REST API.

pub mod email;
