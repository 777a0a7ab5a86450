//! Contact form contents, validation, and submission flow.
//!
//! DESIGN
//! ======
//! The form is bound to `ContactFields` through signals. A submit validates a
//! snapshot, hands it to an `EmailTransport`, and maps the result to a
//! `ContactOutcome`; applying the outcome is the only place that touches the
//! modal and clears the form, so the flow can be driven without a browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::config::EmailConfig;
use crate::net::email::{EmailError, EmailReceipt, EmailTransport, TemplateParams};
use crate::state::modal::ModalState;

pub const VALIDATION_TITLE: &str = "Erreur";
pub const VALIDATION_MESSAGE: &str = "Veuillez remplir tous les champs.";
pub const SENT_TITLE: &str = "Message envoyé !";
pub const FAILED_TITLE: &str = "Erreur";
pub const FAILED_MESSAGE: &str = "Erreur lors de l'envoi. Veuillez réessayer.";

pub fn sent_message(name: &str) -> String {
    format!("Merci {name}, votre message a été envoyé avec succès.")
}

/// The four required inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// `name` attribute of the matching input.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(ContactField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trim every field and reject the first one left empty.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingField` naming the first blank field.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        if let Some(field) = ContactField::ALL.into_iter().find(|f| self.get(*f).trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

/// Validated message ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    Invalid(ContactError),
    Sent { name: String, receipt: EmailReceipt },
    Failed(EmailError),
}

impl ContactOutcome {
    /// Show the matching modal; clear the form only after a delivered message.
    pub fn apply(&self, fields: &mut ContactFields, modal: &mut ModalState) {
        match self {
            Self::Invalid(_) => modal.show(VALIDATION_TITLE, VALIDATION_MESSAGE),
            Self::Sent { name, .. } => {
                modal.show(SENT_TITLE, sent_message(name));
                fields.clear();
            }
            Self::Failed(_) => modal.show(FAILED_TITLE, FAILED_MESSAGE),
        }
    }
}

/// Validate `fields` and, when complete, deliver them through `transport`.
///
/// Invalid input never reaches the transport.
pub async fn submit_contact<T: EmailTransport>(
    transport: &T,
    config: &EmailConfig,
    fields: &ContactFields,
) -> ContactOutcome {
    let submission = match fields.validate() {
        Ok(submission) => submission,
        Err(e) => return ContactOutcome::Invalid(e),
    };
    let params = submission.template_params();
    match transport.send(&config.service_id, &config.template_id, &params).await {
        Ok(receipt) => ContactOutcome::Sent { name: submission.name, receipt },
        Err(e) => ContactOutcome::Failed(e),
    }
}
