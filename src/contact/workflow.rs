//! Contact workflow — validate, send once, report.
//!
//! DESIGN
//! ======
//! The form lives behind a mutex that is only held for synchronous steps.
//! `submit` validates and flips the status to `Submitting` under the lock,
//! releases it across the single `.await` on the sender, then re-acquires it
//! to record the outcome. A concurrent `submit` sees `Submitting` and backs
//! off without dispatching. If the in-flight future is dropped or the sender
//! panics, `InFlight` marks the attempt `Failed` so the form stays usable.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use super::form::{ContactForm, Field, Status};
use super::notice::{Notice, Notifier};
use super::validate::{ValidationError, validate};
use crate::config::Recipient;
use crate::email::{EmailError, EmailSender, TemplateParams};

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("delivery failed: {0}")]
    Delivery(#[from] EmailError),
}

/// Non-error results of [`ContactWorkflow::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Another submission was already in flight; nothing was dispatched.
    AlreadySubmitting,
}

pub struct ContactWorkflow {
    form: Mutex<ContactForm>,
    recipient: Recipient,
    sender: Arc<dyn EmailSender>,
    notifier: Arc<dyn Notifier>,
}

impl ContactWorkflow {
    #[must_use]
    pub fn new(recipient: Recipient, sender: Arc<dyn EmailSender>, notifier: Arc<dyn Notifier>) -> Self {
        Self { form: Mutex::new(ContactForm::new()), recipient, sender, notifier }
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.lock_form().set(field, value);
    }

    /// Clear the form. No-op while a request is in flight.
    pub fn reset(&self) -> bool {
        self.lock_form().reset()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.lock_form().status()
    }

    #[must_use]
    pub fn snapshot(&self) -> ContactForm {
        self.lock_form().clone()
    }

    /// Validate the current form and, if it passes, send it.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Validation`] when the form is incomplete or the
    /// email is malformed (nothing is sent), or [`ContactError::Delivery`]
    /// when the email service call fails (fields are kept for a retry).
    pub async fn submit(&self) -> Result<SubmitOutcome, ContactError> {
        let params = {
            let mut form = self.lock_form();
            if form.status() == Status::Submitting {
                debug!("submit ignored: request already in flight");
                return Ok(SubmitOutcome::AlreadySubmitting);
            }
            if let Err(e) = validate(&form) {
                form.mark_editing();
                drop(form);
                debug!(error = %e, "contact form rejected");
                self.notifier.notify(e.notice());
                return Err(e.into());
            }
            form.begin_submit();
            self.template_params(&form)
        };

        let in_flight = InFlight::new(&self.form);
        info!(from_email = %params.from_email, "dispatching contact message");
        let result = self.sender.send(&params).await;
        in_flight.disarm();

        match result {
            Ok(()) => {
                self.lock_form().complete_success();
                info!("contact message sent");
                self.notifier.notify(Notice::Sent);
                Ok(SubmitOutcome::Sent)
            }
            Err(e) => {
                self.lock_form().complete_failure();
                error!(error = %e, "contact message delivery failed");
                self.notifier.notify(Notice::Failed);
                Err(e.into())
            }
        }
    }

    fn template_params(&self, form: &ContactForm) -> TemplateParams {
        TemplateParams {
            from_name: form.name().to_owned(),
            to_name: self.recipient.name.clone(),
            from_email: form.email().to_owned(),
            to_email: self.recipient.email.clone(),
            message: form.message().to_owned(),
        }
    }

    fn lock_form(&self) -> MutexGuard<'_, ContactForm> {
        lock(&self.form)
    }
}

fn lock(form: &Mutex<ContactForm>) -> MutexGuard<'_, ContactForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Held across the send. Dropping it while armed records a failed attempt.
struct InFlight<'a> {
    form: &'a Mutex<ContactForm>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(form: &'a Mutex<ContactForm>) -> Self {
        Self { form, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.form).complete_failure();
            warn!("contact submission abandoned before the email service answered");
        }
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
