//! Notification value object.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A message from a doctor to a patient. No gateway operation reads these
/// yet; the entity is part of the shared model handed to the presentation
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notif_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub message: String,
    pub timestamp: NaiveDateTime,
}
