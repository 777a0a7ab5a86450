//! Fixed top navbar with in-page links.

use leptos::prelude::*;

use crate::state::section::Section;

/// Navbar that switches to its compact `scrolled` style past the top of the page.
#[component]
pub fn Navbar(#[prop(into)] scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <nav class="navbar" class:scrolled=move || scrolled.get()>
            <a class="navbar__brand" href="#home">"Portfolio"</a>
            <ul class="navbar__links">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a class="navbar__link" href=format!("#{}", section.id())>
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
