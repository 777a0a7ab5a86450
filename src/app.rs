//! Root application component with context providers and page listeners.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::{
    clock_nav::ClockNav, contact_form::ContactForm, modal::Modal, navbar::Navbar, page_section::PageSection,
};
use crate::state::{modal::ModalState, nav::NavState, section::Section};

/// Install the window-level listeners once the page is mounted.
#[cfg(feature = "csr")]
fn install_page_listeners(nav: RwSignal<NavState>, scrolled: RwSignal<bool>) {
    use crate::state::nav::navbar_scrolled;
    use crate::util::{reveal, scroll};

    scroll::on_window_scroll(move || {
        let scroll_y = scroll::window_scroll_y();
        let is_scrolled = navbar_scrolled(scroll_y);
        if scrolled.get_untracked() != is_scrolled {
            scrolled.set(is_scrolled);
        }

        let bounds = scroll::section_bounds();
        let mut next = nav.get_untracked();
        if next.sync_to_scroll(scroll_y, &bounds) {
            log::debug!("scrolled into {}", next.current.id());
            nav.set(next);
        }
    });
    scroll::install_anchor_smooth_scroll();
    reveal::observe_reveals();
}

/// Root application component.
///
/// Provides the navigation and modal state contexts and lays out the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::new(Section::Home));
    let modal = RwSignal::new(ModalState::default());
    let scrolled = RwSignal::new(false);

    provide_context(nav);
    provide_context(modal);

    #[cfg(feature = "csr")]
    {
        Effect::new(move || install_page_listeners(nav, scrolled));
    }

    view! {
        <Stylesheet id="portfolio" href="/style.css"/>
        <Title text="Portfolio"/>

        <Navbar scrolled=scrolled/>
        <ClockNav/>
        <main class="page">
            <PageSection section=Section::Home>
                <p class="hero__tagline">"Développeur, bienvenue sur mon portfolio."</p>
            </PageSection>
            <PageSection section=Section::About>
                <p>"Parcours, centres d'intérêt et façon de travailler."</p>
            </PageSection>
            <PageSection section=Section::Projects>
                <div class="projects-grid"></div>
            </PageSection>
            <PageSection section=Section::Skills>
                <div class="skills-grid"></div>
            </PageSection>
            <PageSection section=Section::Contact>
                <ContactForm/>
            </PageSection>
        </main>
        <Modal/>
    }
}
