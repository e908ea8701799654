//! Booking value object.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An appointment between one patient and one doctor. Created out of this
/// core's scope; read by the view-bookings use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub booking_time: NaiveDateTime,
}
