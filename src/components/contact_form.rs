//! Contact form posting through EmailJS and reporting via the modal.
//!
//! A single submit handler owns validation and delivery; overlapping submits
//! are not de-duplicated and each runs its own request.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFields};
use crate::state::modal::ModalState;

#[cfg(feature = "csr")]
fn log_outcome(outcome: &crate::state::contact::ContactOutcome) {
    use crate::state::contact::ContactOutcome;
    match outcome {
        ContactOutcome::Invalid(e) => log::debug!("contact form rejected: {e}"),
        ContactOutcome::Sent { receipt, .. } => log::info!("contact message sent: {} {}", receipt.status, receipt.text),
        ContactOutcome::Failed(e) => log::warn!("contact message failed: {e}"),
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Votre nom",
        ContactField::Email => "Votre email",
        ContactField::Subject => "Sujet",
        ContactField::Message => "Votre message",
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let fields = RwSignal::new(ContactFields::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = fields.get_untracked();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let config = crate::config::EmailConfig::default();
            let client = crate::net::email::EmailJsClient::from_config(&config);
            let outcome = crate::state::contact::submit_contact(&client, &config, &snapshot).await;
            log_outcome(&outcome);
            let mut next_fields = fields.get_untracked();
            let mut next_modal = modal.get_untracked();
            outcome.apply(&mut next_fields, &mut next_modal);
            fields.set(next_fields);
            modal.set(next_modal);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (snapshot, modal);
        }
    };

    let input = move |field: ContactField, kind: &'static str| {
        view! {
            <input
                class="contact-form__input"
                type=kind
                name=field.name()
                placeholder=placeholder(field)
                prop:value=move || fields.with(|f| f.get(field).to_owned())
                on:input=move |ev| fields.update(|f| f.set(field, event_target_value(&ev)))
            />
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            {input(ContactField::Name, "text")}
            {input(ContactField::Email, "email")}
            {input(ContactField::Subject, "text")}
            <textarea
                class="contact-form__input contact-form__input--message"
                name=ContactField::Message.name()
                placeholder=placeholder(ContactField::Message)
                prop:value=move || fields.with(|f| f.message.clone())
                on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
            ></textarea>
            <button class="contact-form__submit" type="submit">
                "Envoyer"
            </button>
        </form>
    }
}
