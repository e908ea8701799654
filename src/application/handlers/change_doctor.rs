//! ChangeDoctorHandler - reassigns a patient to a different doctor.

use std::sync::Arc;

use crate::domain::{DomainError, Patient};
use crate::ports::DataGateway;

/// The patient as currently held by the caller plus the chosen doctor.
#[derive(Debug, Clone)]
pub struct ChangeDoctorCommand {
    pub patient: Patient,
    pub new_doctor_id: i32,
}

/// Handler for the change-doctor use case.
pub struct ChangeDoctorHandler {
    gateway: Arc<dyn DataGateway>,
}

impl ChangeDoctorHandler {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Resolves the chosen doctor, applies the full update, and returns
    /// the re-read patient row.
    pub async fn handle(&self, cmd: ChangeDoctorCommand) -> Result<Patient, DomainError> {
        let doctor = self.gateway.get_doctor(cmd.new_doctor_id).await?;
        let updated = self.gateway.change_doctor(&cmd.patient, &doctor).await?;
        tracing::info!(patient_id = ?updated.id, doctor_id = doctor.id, "doctor changed");
        Ok(updated)
    }
}
