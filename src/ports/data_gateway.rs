//! Data gateway port.
//!
//! Defines the contract over the practice's relational store. The wire
//! contract is a fixed set of stored procedures; each trait operation maps
//! to exactly one of them. Implementations own the live connection and are
//! the sole writer of entity state at rest.

use async_trait::async_trait;

use crate::domain::{Booking, Certification, Doctor, DomainError, Patient};

/// Typed operations over the practice store.
///
/// Implementations must ensure:
/// - every failure path returns a typed [`DomainError`]; nothing is logged
///   and swallowed
/// - "zero rows" on a single-row call maps to the entity's not-found error,
///   never to a generic failure
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Look up a patient by credentials.
    ///
    /// # Errors
    ///
    /// - `PatientNotFound` if no row matches
    /// - `CorruptRow` if a row matched but could not be decoded
    /// - `DatabaseUnavailable` on any transport failure
    async fn find_patient(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Patient, DomainError>;

    /// Look up a patient by store-assigned id. Same failure modes as
    /// [`find_patient`](Self::find_patient).
    async fn get_patient(&self, patient_id: i32) -> Result<Patient, DomainError>;

    /// Insert a new patient assigned to `doctor` and return the stored row.
    ///
    /// The insert procedure does not return the generated id, so
    /// implementations perform a compensating read keyed by the unique
    /// credentials just inserted. That read is well-defined because email
    /// is unique, and relies on read-after-write visibility on the
    /// connection that performed the insert.
    ///
    /// # Errors
    ///
    /// - `EmailAlreadyInUse` if the uniqueness constraint is violated
    /// - `DatabaseUnavailable` otherwise
    async fn register_patient(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError>;

    /// Full-row update including doctor reassignment. No distinct
    /// not-found signal; the caller is responsible for a valid id.
    async fn update_patient_full(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<(), DomainError>;

    /// Update a patient keeping their current doctor, then return the
    /// stored row.
    async fn update_patient(&self, patient: &Patient) -> Result<Patient, DomainError>;

    /// Reassign the patient to `doctor`, then return the stored row.
    /// Any domain error from the re-read is flattened into
    /// `DatabaseUnavailable`.
    async fn change_doctor(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError>;

    /// The doctor currently assigned to `patient_id`.
    ///
    /// # Errors
    ///
    /// - `DoctorNotFound` if no row matches
    async fn find_doctor(&self, patient_id: i32) -> Result<Doctor, DomainError>;

    /// Look up a doctor by id.
    async fn get_doctor(&self, doctor_id: i32) -> Result<Doctor, DomainError>;

    /// Every doctor in the practice. An empty list is a valid result.
    async fn list_doctors(&self) -> Result<Vec<Doctor>, DomainError>;

    /// Certifications held by one doctor. An empty list is a valid result.
    async fn list_certifications(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<Certification>, DomainError>;

    /// Bookings for one patient, oldest first. An empty list is a valid
    /// result.
    async fn list_bookings(&self, patient_id: i32) -> Result<Vec<Booking>, DomainError>;

    /// Delete a patient row. Idempotent from the caller's perspective:
    /// an already-absent row is success.
    async fn delete_patient(&self, patient_id: i32) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn data_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn DataGateway) {}
    }
}
