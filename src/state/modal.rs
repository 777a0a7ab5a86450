//! Feedback modal content and visibility.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// A single overlay slot; a new `show` replaces whatever was displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub title: String,
    pub message: String,
}

impl ModalState {
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    /// CSS `display` value for the overlay.
    pub fn display(&self) -> &'static str {
        if self.open { "flex" } else { "none" }
    }
}
