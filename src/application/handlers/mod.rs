//! Application handlers.
//!
//! One handler per use case; each composes the validator with the gateway
//! port and owns no state beyond its injected handles.

mod change_doctor;
mod choose_doctor;
mod login;
mod register;
mod update_profile;
mod view_bookings;

pub use change_doctor::{ChangeDoctorCommand, ChangeDoctorHandler};
pub use choose_doctor::ChooseDoctorHandler;
pub use login::{LogInCommand, LogInHandler};
pub use register::{RegisterCommand, RegisterHandler};
pub use update_profile::UpdateProfileHandler;
pub use view_bookings::ViewBookingsHandler;
