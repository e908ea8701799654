//! ChooseDoctorHandler - doctor list and per-doctor detail for selection.

use std::sync::Arc;

use crate::domain::{Certification, Doctor, DomainError};
use crate::ports::DataGateway;

/// Handler backing the doctor-selection view.
pub struct ChooseDoctorHandler {
    gateway: Arc<dyn DataGateway>,
}

impl ChooseDoctorHandler {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Every doctor in the practice. Empty means the practice seeded no
    /// doctors yet; it is not an error.
    pub async fn doctors(&self) -> Result<Vec<Doctor>, DomainError> {
        self.gateway.list_doctors().await
    }

    /// Certifications for the detail pane of one doctor.
    pub async fn certifications(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<Certification>, DomainError> {
        self.gateway.list_certifications(doctor_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryDataGateway;
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

    #[tokio::test]
    async fn lists_seeded_doctors() {
        let gateway = Arc::new(InMemoryDataGateway::new());
        gateway.seed_doctor(doctor(2)).await;
        gateway.seed_doctor(doctor(1)).await;

        let handler = ChooseDoctorHandler::new(gateway);
        let doctors = handler.doctors().await.unwrap();
        assert_eq!(doctors.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn lists_certifications_per_doctor() {
        let gateway = Arc::new(InMemoryDataGateway::new());
        gateway.seed_doctor(doctor(1)).await;
        gateway
            .seed_certification(Certification {
                doctor_id: 1,
                cert_id: 10,
                name: "Cardiology Board".into(),
                field: "Cardiology".into(),
                date_obtained: NaiveDate::from_ymd_opt(2001, 5, 20).unwrap(),
            })
            .await;

        let handler = ChooseDoctorHandler::new(gateway);
        let certs = handler.certifications(1).await.unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].field, "Cardiology");

        assert!(handler.certifications(2).await.unwrap().is_empty());
    }
}
