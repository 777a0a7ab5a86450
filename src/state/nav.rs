//! Clock navigation state shared by the dial, the menu, and the scroll tracker.
//!
//! DESIGN
//! ======
//! `current` is the committed section (scroll position or an explicit pick).
//! `indicator` is what the dial hand shows, which can run ahead of `current`
//! while the pointer previews menu entries. Holding the pointer over the clock
//! takes the interaction lock and freezes scroll-driven updates.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::{NAVBAR_SCROLLED_PX, SCROLL_LOOKAHEAD_PX};
use crate::state::section::{Section, nearest_section};
use crate::util::dial_math::hand_transform;

/// Vertical extent of one content block, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub current: Section,
    pub indicator: Section,
    pub pointer_over_clock: bool,
}

impl NavState {
    pub fn new(initial: Section) -> Self {
        Self {
            current: initial,
            indicator: initial,
            pointer_over_clock: false,
        }
    }

    /// Point the hand at `section` and commit it as the current section.
    pub fn set_active_section(&mut self, section: Section) {
        self.indicator = section;
        self.current = section;
    }

    /// Show `section` on the dial without committing it.
    ///
    /// Only honored while the interaction lock is held.
    pub fn preview(&mut self, section: Section) {
        if self.pointer_over_clock {
            self.indicator = section;
        }
    }

    pub fn pointer_enter(&mut self) {
        self.pointer_over_clock = true;
    }

    /// Release the lock and restore the hand to the committed section.
    pub fn pointer_leave(&mut self) {
        self.pointer_over_clock = false;
        self.indicator = self.current;
    }

    /// Commit the section nearest to a pointer angle.
    ///
    /// Ignored unless the pointer is over the clock. Returns the picked section.
    pub fn pointer_at_angle(&mut self, angle: f64) -> Option<Section> {
        if !self.pointer_over_clock {
            return None;
        }
        let section = nearest_section(angle);
        self.set_active_section(section);
        Some(section)
    }

    /// Follow the scroll position unless the pointer holds the clock.
    ///
    /// `bounds` must be in document order; when several blocks contain the
    /// lookahead line the last one wins. Returns `true` when `current` changed.
    pub fn sync_to_scroll(&mut self, scroll_y: f64, bounds: &[SectionBounds]) -> bool {
        let reference_y = scroll_y + SCROLL_LOOKAHEAD_PX;
        let mut changed = false;
        for block in bounds {
            if !block.contains(reference_y) {
                continue;
            }
            if block.section != self.current && !self.pointer_over_clock {
                self.set_active_section(block.section);
                changed = true;
            }
        }
        changed
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.indicator == section
    }

    pub fn hand_angle_deg(&self) -> f64 {
        self.indicator.angle_deg()
    }

    pub fn hand_style(&self) -> String {
        format!("transform: {}", hand_transform(self.hand_angle_deg()))
    }
}

/// Whether the fixed navbar should carry its `scrolled` marker.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_PX
}
