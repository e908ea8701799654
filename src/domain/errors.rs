//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Per-field validation error codes produced by the validator.
///
/// One code per field; the validator classifies malformed input, it never
/// panics on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    InvalidEmail,
    InvalidPassword,
    InvalidFirstName,
    InvalidMiddleName,
    InvalidLastName,
    InvalidDateOfBirth,
    InvalidGender,
    InvalidPhone,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldError::InvalidEmail => "INVALID_EMAIL_FORMAT",
            FieldError::InvalidPassword => "INVALID_PASSWORD_FORMAT",
            FieldError::InvalidFirstName => "INVALID_FIRST_NAME",
            FieldError::InvalidMiddleName => "INVALID_MIDDLE_NAME",
            FieldError::InvalidLastName => "INVALID_LAST_NAME",
            FieldError::InvalidDateOfBirth => "INVALID_DATE_OF_BIRTH",
            FieldError::InvalidGender => "INVALID_GENDER",
            FieldError::InvalidPhone => "INVALID_PHONE_NUMBER",
        };
        write!(f, "{}", s)
    }
}

/// Domain error taxonomy shared by the gateway, the session store, and the
/// application handlers.
///
/// Handlers introduce no kinds of their own: they aggregate validator codes
/// into `InvalidFields`/`InvalidCredentials` and pass gateway errors through
/// unchanged.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// One or more input fields failed validation. Surfaced before any
    /// store access.
    #[error("invalid input: {}", format_codes(.0))]
    InvalidFields(Vec<FieldError>),

    /// Login credentials failed format checks. The message is deliberately
    /// generic so it does not reveal which of email/password was wrong;
    /// the codes are carried for programmatic callers.
    #[error("invalid email or password")]
    InvalidCredentials { errors: Vec<FieldError> },

    /// The patient uniqueness constraint on email was violated on insert.
    #[error("email address already in use")]
    EmailAlreadyInUse,

    /// No patient row matched. A definitive negative result, not a bug.
    #[error("patient not found")]
    PatientNotFound,

    /// No doctor row matched.
    #[error("doctor not found")]
    DoctorNotFound,

    /// A row came back but one of its columns could not be decoded.
    /// Kept distinct from not-found so absence and corruption are
    /// distinguishable to callers.
    #[error("corrupt {entity} row: column '{column}' could not be read")]
    CorruptRow {
        entity: &'static str,
        column: String,
    },

    /// Connectivity failure, driver error, or any unclassified store
    /// failure. Fatal for the operation; not retried.
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// The session file could not be written or read.
    #[error("session storage failed: {0}")]
    SessionStorage(String),
}

impl DomainError {
    /// True for errors a caller may resolve by correcting their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFields(_)
                | DomainError::InvalidCredentials { .. }
                | DomainError::EmailAlreadyInUse
        )
    }
}

fn format_codes(codes: &[FieldError]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
