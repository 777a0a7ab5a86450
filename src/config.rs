//! Fixed client configuration.
//!
//! The EmailJS identifiers are public values baked into the bundle; there is
//! no runtime configuration source.

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "uyMIXcMMk2VTF0Wcz";
pub const DEFAULT_EMAILJS_SERVICE_ID: &str = "service_txm627b";
pub const DEFAULT_EMAILJS_TEMPLATE_ID: &str = "template_0yrg3vi";

/// Lookahead added to the scroll offset before matching section bounds.
pub const SCROLL_LOOKAHEAD_PX: f64 = 200.0;
/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Share of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_owned(),
            public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_owned(),
            service_id: DEFAULT_EMAILJS_SERVICE_ID.to_owned(),
            template_id: DEFAULT_EMAILJS_TEMPLATE_ID.to_owned(),
        }
    }
}
