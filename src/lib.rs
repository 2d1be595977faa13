//! Contact form workflow for a portfolio site.
//!
//! Validates a name/email/message triple, sends it through EmailJS, and
//! reports the outcome to whatever front-end drives it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`contact`] | Form state machine, validation, notices, and [`contact::ContactWorkflow`] |
//! | [`email`] | [`email::EmailSender`] seam and the EmailJS REST client |
//! | [`config`] | Typed configuration read from the environment |

pub mod config;
pub mod contact;
pub mod email;
