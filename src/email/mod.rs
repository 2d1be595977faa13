//! Email delivery — outbound message payload and the sender seam.
//!
//! DESIGN
//! ======
//! The contact workflow only knows `EmailSender`. `EmailJsClient` is the
//! production implementation; tests substitute in-memory fakes.

pub mod emailjs;

use serde::Serialize;

pub use emailjs::EmailJsClient;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while delivering a contact message.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("email request failed: {0}")]
    Request(String),

    /// The email service answered with a non-success status.
    #[error("email service rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Template variables sent with every contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

// =============================================================================
// SENDER TRAIT
// =============================================================================

/// Delivers one message. Enables mocking in tests.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    /// Send `params` through the email service.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] on transport failure or service rejection.
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError>;
}
