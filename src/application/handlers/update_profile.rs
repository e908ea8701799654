//! UpdateProfileHandler - edits a patient's own details.

use std::sync::Arc;

use crate::domain::validation::{
    verify_email, verify_first_name, verify_gender, verify_last_name, verify_middle_name,
    verify_phone,
};
use crate::domain::{DomainError, Patient};
use crate::ports::DataGateway;

/// Handler for the profile-update use case. The patient keeps their
/// current doctor; doctor changes go through the change-doctor use case.
pub struct UpdateProfileHandler {
    gateway: Arc<dyn DataGateway>,
}

impl UpdateProfileHandler {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Validates the editable fields, then applies the full-row update and
    /// returns the stored row. The password hash is opaque and not
    /// re-validated here.
    pub async fn handle(&self, patient: Patient) -> Result<Patient, DomainError> {
        let mut errors = Vec::new();
        for check in [
            verify_email(&patient.email),
            verify_first_name(&patient.first_name),
            verify_middle_name(patient.middle_name.as_deref().unwrap_or_default()),
            verify_last_name(&patient.last_name),
            verify_gender(&patient.gender),
            verify_phone(&patient.phone),
        ] {
            if let Err(code) = check {
                errors.push(code);
            }
        }
        if !errors.is_empty() {
            return Err(DomainError::InvalidFields(errors));
        }

        let updated = self.gateway.update_patient(&patient).await?;
        tracing::info!(patient_id = ?updated.id, "profile updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryDataGateway;
    use crate::domain::{Doctor, FieldError};
    use chrono::NaiveDate;

    fn doctor(id: i32) -> Doctor {
        Doctor {
            id,
            email: format!("doctor{id}@practice.com"),
            first_name: "Gregory".into(),
            middle_name: None,
            last_name: "House".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1959, 6, 11).unwrap(),
            gender: "Male".into(),
            phone: "5551234".into(),
        }
    }

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

    #[tokio::test]
    async fn updates_fields_and_keeps_doctor() {
        let gateway = Arc::new(InMemoryDataGateway::new());
        gateway.seed_doctor(doctor(1)).await;
        let patient = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();

        let handler = UpdateProfileHandler::new(gateway.clone());
        let mut modified = patient.clone();
        modified.phone = "98765".into();
        let updated = handler.handle(modified).await.unwrap();
        assert_eq!(updated.phone, "98765");

        let assigned = gateway.find_doctor(patient.id.unwrap()).await.unwrap();
        assert_eq!(assigned.id, 1);
    }

    #[tokio::test]
    async fn rejects_invalid_fields_before_store_access() {
        let gateway = Arc::new(InMemoryDataGateway::new());
        let handler = UpdateProfileHandler::new(gateway);

        let mut patient = jane().with_id(1);
        patient.email = "broken".into();
        patient.phone = "xx".into();

        let result = handler.handle(patient).await;
        match result {
            Err(DomainError::InvalidFields(errors)) => {
                assert_eq!(
                    errors,
                    vec![FieldError::InvalidEmail, FieldError::InvalidPhone]
                );
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }
}
