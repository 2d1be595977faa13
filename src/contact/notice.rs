//! User-facing outcome notices and the channel that delivers them.

use std::fmt;

/// Every terminal outcome of a submit attempt maps to exactly one notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    FillAllFields,
    InvalidEmail,
    Sent,
    Failed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::FillAllFields => "Please fill out all fields!",
            Self::InvalidEmail => "Please enter a valid email!",
            Self::Sent => "Thank you! Your message has been sent.",
            Self::Failed => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Sent
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Surfaces notices to the user. Called synchronously, once per outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;
