//! EmailJS delivery client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against the EmailJS REST
//! endpoint. Native builds have no browser transport and report
//! `EmailError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are both surfaced as `EmailError`
//! so the contact form can show one generic failure message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use serde::Serialize;

use crate::config::EmailConfig;

/// Errors produced while delivering a contact message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    /// The HTTP request could not be built or sent.
    #[error("email request failed: {0}")]
    Request(String),

    /// The delivery service answered with a non-success status.
    #[error("email rejected: status {status}: {text}")]
    Rejected { status: u16, text: String },

    /// No browser transport in this build.
    #[error("email delivery is only available in the browser")]
    Unavailable,
}

/// Status/text pair returned by a fulfilled send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceipt {
    pub status: u16,
    pub text: String,
}

/// Template variables consumed by the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Outbound seam to the transactional-email service.
#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    async fn send(&self, service_id: &str, template_id: &str, params: &TemplateParams) -> Result<EmailReceipt, EmailError>;
}

/// EmailJS REST client initialized with the account's public key.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    endpoint: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(endpoint: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), public_key: public_key.into() }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(config.endpoint.clone(), config.public_key.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, service_id: &str, template_id: &str, params: &TemplateParams) -> Result<String, EmailError> {
        let request = SendRequest { service_id, template_id, user_id: &self.public_key, template_params: params };
        serde_json::to_string(&request).map_err(|e| EmailError::Request(e.to_string()))
    }
}

impl EmailTransport for EmailJsClient {
    async fn send(&self, service_id: &str, template_id: &str, params: &TemplateParams) -> Result<EmailReceipt, EmailError> {
        let body = self.request_body(service_id, template_id, params)?;
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| EmailError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| EmailError::Request(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                return Err(EmailError::Rejected { status, text });
            }
            Ok(EmailReceipt { status, text })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(EmailError::Unavailable)
        }
    }
}
