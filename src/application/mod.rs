//! Application layer - use-case handlers.
//!
//! This layer orchestrates domain validation and the gateway port into one
//! operation per use case, producing an entity, a list, or a session.

pub mod handlers;

pub use handlers::{
    ChangeDoctorCommand, ChangeDoctorHandler, ChooseDoctorHandler, LogInCommand, LogInHandler,
    RegisterCommand, RegisterHandler, UpdateProfileHandler, ViewBookingsHandler,
};
