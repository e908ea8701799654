//! Domain layer containing entities and pure business rules.
//!
//! # Module Organization
//!
//! - `errors` - The shared error taxonomy (`DomainError`, `FieldError`)
//! - `validation` - Pure field-format checks run before any persistence
//! - `patient`, `doctor`, `certification`, `booking`, `notification` -
//!   value objects mapped to/from store rows
//! - `session` - The authenticated-patient record

pub mod booking;
pub mod certification;
pub mod doctor;
pub mod errors;
pub mod notification;
pub mod patient;
pub mod session;
pub mod validation;

pub use booking::Booking;
pub use certification::Certification;
pub use doctor::Doctor;
pub use errors::{DomainError, FieldError};
pub use notification::Notification;
pub use patient::Patient;
pub use session::Session;
