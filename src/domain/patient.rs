//! Patient value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient as persisted by the store.
///
/// `id` is `None` until the store assigns one on registration. The password
/// field carries an opaque hash; the gateway stores and compares it but
/// never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Option<i32>,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub phone: String,
}

impl Patient {
    /// Builds an unsaved patient (no id yet).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: Option<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            middle_name,
            last_name: last_name.into(),
            date_of_birth,
            gender: gender.into(),
            phone: phone.into(),
        }
    }

    /// Returns the same patient with a store-assigned id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Equality ignoring the store-assigned id. Used to compare an input
    /// patient against the row the store handed back after registration.
    pub fn same_fields(&self, other: &Patient) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        a.id = None;
        b.id = None;
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Patient {
        Patient::new(
            "a@b.com",
            "abc12345",
            "Jane",
            None,
            "Doe",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "Female",
            "12345",
        )
    }

    #[test]
    fn new_patient_has_no_id() {
        assert_eq!(jane().id, None);
    }

    #[test]
    fn same_fields_ignores_id() {
        let saved = jane().with_id(7);
        assert!(jane().same_fields(&saved));
        assert_ne!(jane(), saved);
    }

    #[test]
    fn same_fields_detects_differences() {
        let mut other = jane().with_id(7);
        other.middle_name = Some("Marie".into());
        assert!(!jane().same_fields(&other));
    }
}
