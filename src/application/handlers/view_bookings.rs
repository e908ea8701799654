//! ViewBookingsHandler - read-only booking composition for one patient.

use std::sync::Arc;

use crate::domain::{Booking, Doctor, DomainError, Patient};
use crate::ports::DataGateway;

/// Handler for the view-bookings use case.
///
/// Callers needing the doctor behind a booking request it here rather than
/// deriving it themselves; the handler owns the composition, with no
/// caching.
pub struct ViewBookingsHandler {
    gateway: Arc<dyn DataGateway>,
}

impl ViewBookingsHandler {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Resolves the patient, then their bookings.
    pub async fn bookings(&self, patient_id: i32) -> Result<Vec<Booking>, DomainError> {
        let patient = self.gateway.get_patient(patient_id).await?;
        // get_patient guarantees the id is present on the returned row.
        let id = patient.id.ok_or(DomainError::PatientNotFound)?;
        self.gateway.list_bookings(id).await
    }

    pub async fn patient(&self, patient_id: i32) -> Result<Patient, DomainError> {
        self.gateway.get_patient(patient_id).await
    }

    /// The doctor currently assigned to the patient.
    pub async fn patient_doctor(&self, patient: &Patient) -> Result<Doctor, DomainError> {
        let id = patient.id.ok_or(DomainError::PatientNotFound)?;
        self.gateway.find_doctor(id).await
    }

    /// The doctor a booking is with, for display next to the slot.
    pub async fn booking_doctor(&self, booking: &Booking) -> Result<Doctor, DomainError> {
        self.gateway.get_doctor(booking.doctor_id).await
    }
}
