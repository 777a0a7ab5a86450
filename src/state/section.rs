//! Page sections and their fixed positions on the clock dial.
//!
//! DESIGN
//! ======
//! The section set is closed, so ids coming from the DOM are parsed into
//! `Section` once and every other module works with the enum. Search order is
//! the declaration order in `Section::ALL`, which also decides ties.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use crate::util::dial_math::angular_delta_deg;

/// One named region of the single-page layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Every section in search order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the content block and `data-section` value of its menu entry.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Menu label shown next to the dial.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Accueil",
            Self::About => "À propos",
            Self::Projects => "Projets",
            Self::Skills => "Compétences",
            Self::Contact => "Contact",
        }
    }

    /// Dial angle in degrees, `[0, 360)`.
    pub fn angle_deg(self) -> f64 {
        match self {
            Self::Home => 0.0,
            Self::About => 90.0,
            Self::Projects => 180.0,
            Self::Skills => 270.0,
            Self::Contact => 45.0,
        }
    }
}

/// Section whose dial angle is closest to `angle` on the circle.
///
/// Ties go to the section listed first in [`Section::ALL`]. Non-finite input
/// resolves to [`Section::Home`].
pub fn nearest_section(angle: f64) -> Section {
    if !angle.is_finite() {
        return Section::Home;
    }
    let mut nearest = Section::Home;
    let mut min_distance = f64::INFINITY;
    for section in Section::ALL {
        let distance = angular_delta_deg(angle, section.angle_deg());
        if distance < min_distance {
            min_distance = distance;
            nearest = section;
        }
    }
    nearest
}
