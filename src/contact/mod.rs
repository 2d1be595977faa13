//! Contact submission — form state, validation, notices, and the
//! validate-then-send workflow.

pub mod form;
pub mod notice;
pub mod validate;
pub mod workflow;

pub use form::{ContactForm, Field, Status};
pub use notice::{Notice, Notifier};
pub use validate::ValidationError;
pub use workflow::{ContactError, ContactWorkflow, SubmitOutcome};
