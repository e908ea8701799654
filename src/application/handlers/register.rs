//! RegisterHandler - creates a new patient under a chosen doctor.

use std::sync::Arc;

use crate::domain::validation::{
    verify_date_of_birth, verify_email, verify_first_name, verify_gender, verify_last_name,
    verify_middle_name, verify_password, verify_phone,
};
use crate::domain::{DomainError, Patient};
use crate::ports::DataGateway;

/// Raw registration input as entered in the form.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// `%Y-%m-%d`
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub doctor_id: i32,
}

/// Handler for the registration use case.
pub struct RegisterHandler {
    gateway: Arc<dyn DataGateway>,
}

impl RegisterHandler {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Runs every field check, aggregates all failing codes, and only then
    /// touches the store: resolves the chosen doctor and inserts the
    /// patient.
    pub async fn handle(&self, cmd: RegisterCommand) -> Result<Patient, DomainError> {
        let mut errors = Vec::new();
        let mut dob = None;

        for check in [
            verify_email(&cmd.email),
            verify_password(&cmd.password),
            verify_first_name(&cmd.first_name),
            verify_middle_name(&cmd.middle_name),
            verify_last_name(&cmd.last_name),
            verify_gender(&cmd.gender),
            verify_phone(&cmd.phone),
        ] {
            if let Err(code) = check {
                errors.push(code);
            }
        }
        match verify_date_of_birth(&cmd.date_of_birth) {
            Ok(date) => dob = Some(date),
            Err(code) => errors.push(code),
        }

        if !errors.is_empty() {
            return Err(DomainError::InvalidFields(errors));
        }
        let Some(dob) = dob else {
            // Unreachable: a missing date is reported above.
            return Err(DomainError::InvalidFields(vec![
                crate::domain::FieldError::InvalidDateOfBirth,
            ]));
        };

        let doctor = self.gateway.get_doctor(cmd.doctor_id).await?;

        let middle_name = if cmd.middle_name.is_empty() {
            None
        } else {
            Some(cmd.middle_name.clone())
        };
        let patient = Patient::new(
            cmd.email,
            cmd.password,
            cmd.first_name,
            middle_name,
            cmd.last_name,
            dob,
            cmd.gender,
            cmd.phone,
        );

        let registered = self.gateway.register_patient(&patient, &doctor).await?;
        tracing::info!(patient_id = ?registered.id, doctor_id = doctor.id, "patient registered");
        Ok(registered)
    }
}
