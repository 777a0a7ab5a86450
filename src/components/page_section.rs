//! Content block shell addressed by a section id.

use leptos::prelude::*;

use crate::state::section::Section;

/// `<section>` whose id and bounds feed the scroll tracker.
///
/// The heading and body are reveal targets.
#[component]
pub fn PageSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.id() class="page-section">
            <h2 class="page-section__title animate-on-scroll">{section.label()}</h2>
            <div class="page-section__body animate-on-scroll">{children()}</div>
        </section>
    }
}
