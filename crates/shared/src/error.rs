use thiserror::Error;

use crate::domain::FormField;

/// A draft that would be refused by native form validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(FormField),
    #[error("email must look like name@domain")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidEmail => FormField::Email,
        }
    }

    /// Wording shown next to the offending input.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill out this field.",
            Self::InvalidEmail => "Please include an '@' and a domain in the email address.",
        }
    }
}

/// Any failure of the outbound relay call. All variants surface as the same
/// destructive toast; the distinction only reaches the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("relay returned a malformed response: {0}")]
    MalformedResponse(String),
    #[error("submission backend unavailable: {0}")]
    BackendUnavailable(String),
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
