//! In-memory contact submission record and its status machine.
//!
//! DESIGN
//! ======
//! `ContactForm` is owned exclusively by one workflow instance. Status moves
//! `Editing -> Submitting -> {Succeeded, Failed}` and back to `Editing` on the
//! next edit or reset. `Submitting` doubles as the single in-flight guard.

use std::fmt;
use std::str::FromStr;

/// One of the three user-editable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown contact field '{0}' (expected name, email or message)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// Lifecycle of a single submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: Status,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Replace one field. A finished attempt returns to `Editing`; an
    /// in-flight one keeps its status.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
        if matches!(self.status, Status::Succeeded | Status::Failed) {
            self.status = Status::Editing;
        }
    }

    /// Clear every field and return to `Editing`. Returns `false` without
    /// touching anything while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.status == Status::Submitting {
            return false;
        }
        *self = Self::default();
        true
    }

    pub(crate) fn mark_editing(&mut self) {
        if self.status != Status::Submitting {
            self.status = Status::Editing;
        }
    }

    /// Enter `Submitting`. Returns `false` if already in flight.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.status == Status::Submitting {
            return false;
        }
        self.status = Status::Submitting;
        true
    }

    pub(crate) fn complete_success(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = Status::Succeeded;
    }

    pub(crate) fn complete_failure(&mut self) {
        self.status = Status::Failed;
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
