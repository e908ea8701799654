//! In-memory implementation of the data gateway.
//!
//! Backs the same contract as the MySQL adapter with hash maps behind an
//! `RwLock`. Useful for tests and local development: uniqueness, not-found
//! and delete-idempotence semantics match the real store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Booking, Certification, Doctor, DomainError, Patient};
use crate::ports::DataGateway;

#[derive(Default)]
struct Inner {
    patients: HashMap<i32, Patient>,
    // patient id -> assigned doctor id
    assignments: HashMap<i32, i32>,
    doctors: HashMap<i32, Doctor>,
    certifications: Vec<Certification>,
    bookings: Vec<Booking>,
    next_patient_id: i32,
}

/// In-memory [`DataGateway`].
#[derive(Clone, Default)]
pub struct InMemoryDataGateway {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryDataGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a doctor row, as the deployed schema would out of band.
    pub async fn seed_doctor(&self, doctor: Doctor) {
        self.inner.write().await.doctors.insert(doctor.id, doctor);
    }

    pub async fn seed_certification(&self, certification: Certification) {
        self.inner.write().await.certifications.push(certification);
    }

    pub async fn seed_booking(&self, booking: Booking) {
        self.inner.write().await.bookings.push(booking);
    }
}

#[async_trait]
impl DataGateway for InMemoryDataGateway {
    async fn find_patient(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Patient, DomainError> {
        let inner = self.inner.read().await;
        inner
            .patients
            .values()
            .find(|p| p.email == email && p.password_hash == password_hash)
            .cloned()
            .ok_or(DomainError::PatientNotFound)
    }

    async fn get_patient(&self, patient_id: i32) -> Result<Patient, DomainError> {
        let inner = self.inner.read().await;
        inner
            .patients
            .get(&patient_id)
            .cloned()
            .ok_or(DomainError::PatientNotFound)
    }

    async fn register_patient(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.doctors.contains_key(&doctor.id) {
            return Err(DomainError::DoctorNotFound);
        }
        if inner.patients.values().any(|p| p.email == patient.email) {
            return Err(DomainError::EmailAlreadyInUse);
        }

        inner.next_patient_id += 1;
        let id = inner.next_patient_id;
        let stored = patient.clone().with_id(id);
        inner.patients.insert(id, stored.clone());
        inner.assignments.insert(id, doctor.id);
        Ok(stored)
    }

    async fn update_patient_full(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<(), DomainError> {
        let id = patient.id.ok_or(DomainError::PatientNotFound)?;
        let mut inner = self.inner.write().await;
        // Mirrors the store procedure: an unmatched id updates nothing and
        // reports nothing.
        if inner.patients.contains_key(&id) {
            inner.patients.insert(id, patient.clone());
            inner.assignments.insert(id, doctor.id);
        }
        Ok(())
    }

    async fn update_patient(&self, patient: &Patient) -> Result<Patient, DomainError> {
        let id = patient.id.ok_or(DomainError::PatientNotFound)?;
        let doctor = self.find_doctor(id).await?;
        self.update_patient_full(patient, &doctor).await?;
        self.find_patient(&patient.email, &patient.password_hash)
            .await
    }

    async fn change_doctor(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError> {
        let id = patient.id.ok_or(DomainError::PatientNotFound)?;
        let result = async {
            self.update_patient_full(patient, doctor).await?;
            self.get_patient(id).await
        }
        .await;
        result.map_err(|e| match e {
            unavailable @ DomainError::DatabaseUnavailable(_) => unavailable,
            other => DomainError::DatabaseUnavailable(other.to_string()),
        })
    }

    async fn find_doctor(&self, patient_id: i32) -> Result<Doctor, DomainError> {
        let inner = self.inner.read().await;
        let doctor_id = inner
            .assignments
            .get(&patient_id)
            .ok_or(DomainError::DoctorNotFound)?;
        inner
            .doctors
            .get(doctor_id)
            .cloned()
            .ok_or(DomainError::DoctorNotFound)
    }

    async fn get_doctor(&self, doctor_id: i32) -> Result<Doctor, DomainError> {
        let inner = self.inner.read().await;
        inner
            .doctors
            .get(&doctor_id)
            .cloned()
            .ok_or(DomainError::DoctorNotFound)
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DomainError> {
        let inner = self.inner.read().await;
        let mut doctors: Vec<Doctor> = inner.doctors.values().cloned().collect();
        doctors.sort_by_key(|d| d.id);
        Ok(doctors)
    }

    async fn list_certifications(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<Certification>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .certifications
            .iter()
            .filter(|c| c.doctor_id == doctor_id)
            .cloned()
            .collect())
    }

    async fn list_bookings(&self, patient_id: i32) -> Result<Vec<Booking>, DomainError> {
        let inner = self.inner.read().await;
        let mut bookings: Vec<Booking> = inner
            .bookings
            .iter()
            .filter(|b| b.patient_id == patient_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.booking_time);
        Ok(bookings)
    }

    async fn delete_patient(&self, patient_id: i32) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner.patients.remove(&patient_id);
        inner.assignments.remove(&patient_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    async fn register_then_get_round_trips_all_fields() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;

        let stored = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();
        assert!(stored.id.is_some());
        assert!(jane().same_fields(&stored));

        let fetched = gateway.get_patient(stored.id.unwrap()).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email_and_keeps_first_row() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;

        let first = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();
        let second = gateway.register_patient(&jane(), &doctor(1)).await;
        assert!(matches!(second, Err(DomainError::EmailAlreadyInUse)));

        let untouched = gateway.get_patient(first.id.unwrap()).await.unwrap();
        assert_eq!(untouched, first);
    }

    #[tokio::test]
    async fn register_requires_existing_doctor() {
        let gateway = InMemoryDataGateway::new();
        let result = gateway.register_patient(&jane(), &doctor(9)).await;
        assert!(matches!(result, Err(DomainError::DoctorNotFound)));
    }

    #[tokio::test]
    async fn find_patient_matches_credentials() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;
        let stored = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();

        let found = gateway.find_patient("a@b.com", "abc12345").await.unwrap();
        assert_eq!(found, stored);

        let miss = gateway.find_patient("a@b.com", "wrong-hash").await;
        assert!(matches!(miss, Err(DomainError::PatientNotFound)));
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_leads_to_not_found() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;
        let stored = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();
        let id = stored.id.unwrap();

        gateway.delete_patient(id).await.unwrap();
        gateway.delete_patient(id).await.unwrap();

        let gone = gateway.get_patient(id).await;
        assert!(matches!(gone, Err(DomainError::PatientNotFound)));
    }

    #[tokio::test]
    async fn change_doctor_updates_assignment() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;
        gateway.seed_doctor(doctor(2)).await;
        let stored = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();

        let after = gateway.change_doctor(&stored, &doctor(2)).await.unwrap();
        assert_eq!(after, stored);

        let assigned = gateway.find_doctor(stored.id.unwrap()).await.unwrap();
        assert_eq!(assigned.id, 2);
    }

    #[tokio::test]
    async fn update_patient_keeps_current_doctor() {
        let gateway = InMemoryDataGateway::new();
        gateway.seed_doctor(doctor(1)).await;
        let stored = gateway.register_patient(&jane(), &doctor(1)).await.unwrap();

        let mut modified = stored.clone();
        modified.middle_name = Some("Marie".into());
        let after = gateway.update_patient(&modified).await.unwrap();
        assert_eq!(after.middle_name.as_deref(), Some("Marie"));

        let assigned = gateway.find_doctor(stored.id.unwrap()).await.unwrap();
        assert_eq!(assigned.id, 1);
    }

    #[tokio::test]
    async fn empty_lists_are_valid_results() {
        let gateway = InMemoryDataGateway::new();
        assert!(gateway.list_doctors().await.unwrap().is_empty());
        assert!(gateway.list_certifications(1).await.unwrap().is_empty());
        assert!(gateway.list_bookings(1).await.unwrap().is_empty());
    }
}
