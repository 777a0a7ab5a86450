use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

struct FakeTransport {
    result: Result<EmailReceipt, EmailError>,
    calls: RefCell<Vec<(String, String, TemplateParams)>>,
}

impl FakeTransport {
    fn delivering() -> Self {
        Self::with(Ok(EmailReceipt { status: 200, text: "OK".to_owned() }))
    }

    fn rejecting() -> Self {
        Self::with(Err(EmailError::Rejected { status: 412, text: "invalid template".to_owned() }))
    }

    fn with(result: Result<EmailReceipt, EmailError>) -> Self {
        Self { result, calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl EmailTransport for FakeTransport {
    async fn send(&self, service_id: &str, template_id: &str, params: &TemplateParams) -> Result<EmailReceipt, EmailError> {
        self.calls
            .borrow_mut()
            .push((service_id.to_owned(), template_id.to_owned(), params.clone()));
        self.result.clone()
    }
}

fn filled() -> ContactFields {
    ContactFields {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Nice clock.".to_owned(),
    }
}

fn run(transport: &FakeTransport, fields: &mut ContactFields, modal: &mut ModalState) -> ContactOutcome {
    let outcome = block_on(submit_contact(transport, &EmailConfig::default(), fields));
    outcome.apply(fields, modal);
    outcome
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_reports_first_blank_field() {
    let mut fields = filled();
    fields.subject = "   ".to_owned();
    fields.message.clear();
    assert_eq!(fields.validate(), Err(ContactError::MissingField(ContactField::Subject)));
}

#[test]
fn validate_trims_values() {
    let mut fields = filled();
    fields.name = "  Ada \n".to_owned();
    let submission = fields.validate().unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.template_params().from_name, "Ada");
}

#[test]
fn field_accessors_cover_every_field() {
    let mut fields = ContactFields::default();
    for field in ContactField::ALL {
        fields.set(field, field.name().to_uppercase());
    }
    assert_eq!(fields.get(ContactField::Email), "EMAIL");
    assert_eq!(fields.message, "MESSAGE");
    fields.clear();
    assert_eq!(fields, ContactFields::default());
}

#[test]
fn contact_error_names_the_field() {
    assert_eq!(
        ContactError::MissingField(ContactField::Email).to_string(),
        "required field is empty: email"
    );
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn empty_email_shows_validation_modal_without_network_call() {
    let transport = FakeTransport::delivering();
    let mut fields = filled();
    fields.email.clear();
    let mut modal = ModalState::default();

    let outcome = run(&transport, &mut fields, &mut modal);

    assert_eq!(outcome, ContactOutcome::Invalid(ContactError::MissingField(ContactField::Email)));
    assert_eq!(transport.call_count(), 0);
    assert!(modal.open);
    assert_eq!(modal.title, VALIDATION_TITLE);
    assert_eq!(modal.message, VALIDATION_MESSAGE);
    assert_eq!(fields.name, "Ada");
}

#[test]
fn delivered_message_shows_personalized_success_and_clears_form() {
    let transport = FakeTransport::delivering();
    let mut fields = filled();
    let mut modal = ModalState::default();

    run(&transport, &mut fields, &mut modal);

    assert_eq!(transport.call_count(), 1);
    assert_eq!(modal.title, SENT_TITLE);
    assert!(modal.message.contains("Ada"));
    assert_eq!(fields, ContactFields::default());
}

#[test]
fn delivery_uses_configured_service_and_template() {
    let transport = FakeTransport::delivering();
    let mut fields = filled();
    let mut modal = ModalState::default();

    run(&transport, &mut fields, &mut modal);

    let calls = transport.calls.borrow();
    let (service_id, template_id, params) = &calls[0];
    assert_eq!(service_id, crate::config::DEFAULT_EMAILJS_SERVICE_ID);
    assert_eq!(template_id, crate::config::DEFAULT_EMAILJS_TEMPLATE_ID);
    assert_eq!(params.from_email, "ada@example.com");
    assert_eq!(params.subject, "Hello");
}

#[test]
fn failed_delivery_shows_generic_error_and_keeps_fields() {
    let transport = FakeTransport::rejecting();
    let mut fields = filled();
    let mut modal = ModalState::default();

    let outcome = run(&transport, &mut fields, &mut modal);

    assert!(matches!(outcome, ContactOutcome::Failed(EmailError::Rejected { status: 412, .. })));
    assert_eq!(transport.call_count(), 1);
    assert_eq!(modal.title, FAILED_TITLE);
    assert_eq!(modal.message, FAILED_MESSAGE);
    assert_eq!(fields, filled());
}

#[test]
fn sent_message_greets_sender() {
    assert_eq!(sent_message("Ada"), "Merci Ada, votre message a été envoyé avec succès.");
}
