//! Feedback overlay bound to the shared `ModalState`.

use leptos::prelude::*;

use crate::state::modal::ModalState;

/// Overlay with a title, a message, and a close button.
///
/// Clicking the backdrop or pressing Escape also closes it.
#[component]
pub fn Modal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let close = move || modal.update(ModalState::hide);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div
            id="modalOverlay"
            class="modal-overlay"
            style:display=move || modal.with(ModalState::display)
            on:click=move |_| close()
        >
            <div class="modal" tabindex="0" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h3 id="modalTitle" class="modal__title">{move || modal.with(|m| m.title.clone())}</h3>
                <p id="modalMessage" class="modal__message">{move || modal.with(|m| m.message.clone())}</p>
                <button id="modalCloseBtn" class="modal__close" on:click=move |_| close()>
                    "Fermer"
                </button>
            </div>
        </div>
    }
}
