//! Doctor certification value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A certification held by exactly one doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub doctor_id: i32,
    pub cert_id: i32,
    pub name: String,
    pub field: String,
    pub date_obtained: NaiveDate,
}
