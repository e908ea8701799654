//! MySQL implementation of the data gateway.
//!
//! Every operation issues one of the practice's stored procedures through a
//! parameterized `CALL`. Procedure names, argument order, and result column
//! names are the wire contract and must stay bit-exact for drop-in
//! compatibility with the deployed schema.
//!
//! Multi-step operations (insert-then-re-read, update-then-re-read) run on
//! a single connection borrowed from the pool, so the compensating read
//! observes the preceding write.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::{MySqlConnection, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::pool::PoolConnection;
use sqlx::{MySql, Row};

use crate::config::DatabaseConfig;
use crate::domain::{Booking, Certification, Doctor, DomainError, Patient};
use crate::ports::DataGateway;

/// MySQL-backed [`DataGateway`] over a connection pool.
#[derive(Clone)]
pub struct MySqlDataGateway {
    pool: MySqlPool,
}

impl MySqlDataGateway {
    /// Wraps an already-connected pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Builds the pool from configuration and probes connectivity.
    ///
    /// Fails fast with `DatabaseUnavailable` when the store cannot be
    /// reached; the application shell is expected to abort startup on
    /// that error.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::DatabaseUnavailable(e.to_string()))?;

        let gateway = Self::new(pool);
        // Connectivity probe; a pool connects lazily otherwise.
        gateway.acquire().await?;
        Ok(gateway)
    }

    async fn acquire(&self) -> Result<PoolConnection<MySql>, DomainError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| DomainError::DatabaseUnavailable(e.to_string()))
    }

    async fn fetch_patient_by_credentials(
        &self,
        conn: &mut MySqlConnection,
        email: &str,
        password_hash: &str,
    ) -> Result<Patient, DomainError> {
        let row = sqlx::query("CALL find_patient(?, ?)")
            .bind(email)
            .bind(password_hash)
            .fetch_optional(&mut *conn)
            .await
            .map_err(transport_error)?;

        match row {
            Some(row) => row_to_patient(&row),
            None => Err(DomainError::PatientNotFound),
        }
    }

    async fn fetch_patient_by_id(
        &self,
        conn: &mut MySqlConnection,
        patient_id: i32,
    ) -> Result<Patient, DomainError> {
        let row = sqlx::query("CALL get_patient(?)")
            .bind(patient_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(transport_error)?;

        match row {
            Some(row) => row_to_patient(&row),
            None => Err(DomainError::PatientNotFound),
        }
    }

    async fn run_full_update(
        &self,
        conn: &mut MySqlConnection,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<(), DomainError> {
        let id = require_id(patient)?;
        sqlx::query("CALL update_patient(?, ?, ?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(id)
            .bind(&patient.email)
            .bind(&patient.password_hash)
            .bind(&patient.first_name)
            .bind(&patient.middle_name)
            .bind(&patient.last_name)
            .bind(patient.date_of_birth)
            .bind(&patient.gender)
            .bind(&patient.phone)
            .bind(doctor.id)
            .execute(&mut *conn)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn fetch_doctor_for_patient(
        &self,
        conn: &mut MySqlConnection,
        patient_id: i32,
    ) -> Result<Doctor, DomainError> {
        let row = sqlx::query("CALL find_doctor(?)")
            .bind(patient_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(transport_error)?;

        match row {
            Some(row) => row_to_doctor(&row),
            None => Err(DomainError::DoctorNotFound),
        }
    }
}

#[async_trait]
impl DataGateway for MySqlDataGateway {
    async fn find_patient(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Patient, DomainError> {
        let mut conn = self.acquire().await?;
        self.fetch_patient_by_credentials(&mut conn, email, password_hash)
            .await
    }

    async fn get_patient(&self, patient_id: i32) -> Result<Patient, DomainError> {
        let mut conn = self.acquire().await?;
        self.fetch_patient_by_id(&mut conn, patient_id).await
    }

    async fn register_patient(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError> {
        let mut conn = self.acquire().await?;

        sqlx::query("CALL insert_patient(?, ?, ?, ?, ?, ?, ?, ?, ?)")
            .bind(&patient.email)
            .bind(&patient.password_hash)
            .bind(&patient.first_name)
            .bind(&patient.middle_name)
            .bind(&patient.last_name)
            .bind(patient.date_of_birth)
            .bind(&patient.gender)
            .bind(&patient.phone)
            .bind(doctor.id)
            .execute(&mut *conn)
            .await
            .map_err(insert_error)?;

        // The insert procedure returns no generated id; re-read on the same
        // connection, keyed by the unique credentials just inserted. A miss
        // here is a store inconsistency, not a user-visible not-found.
        self.fetch_patient_by_credentials(&mut conn, &patient.email, &patient.password_hash)
            .await
            .map_err(|e| match e {
                DomainError::PatientNotFound => DomainError::DatabaseUnavailable(
                    "registered patient could not be read back".into(),
                ),
                other => other,
            })
    }

    async fn update_patient_full(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<(), DomainError> {
        let mut conn = self.acquire().await?;
        self.run_full_update(&mut conn, patient, doctor).await
    }

    async fn update_patient(&self, patient: &Patient) -> Result<Patient, DomainError> {
        let id = require_id(patient)?;
        let mut conn = self.acquire().await?;

        let doctor = self.fetch_doctor_for_patient(&mut conn, id).await?;
        self.run_full_update(&mut conn, patient, &doctor).await?;
        self.fetch_patient_by_credentials(&mut conn, &patient.email, &patient.password_hash)
            .await
    }

    async fn change_doctor(
        &self,
        patient: &Patient,
        doctor: &Doctor,
    ) -> Result<Patient, DomainError> {
        let id = require_id(patient)?;
        let mut conn = self.acquire().await?;

        let result = async {
            self.run_full_update(&mut conn, patient, doctor).await?;
            self.fetch_patient_by_id(&mut conn, id).await
        }
        .await;

        // Flattened on purpose: callers of a doctor change treat any
        // failure past validation as a store failure.
        result.map_err(|e| match e {
            unavailable @ DomainError::DatabaseUnavailable(_) => unavailable,
            other => DomainError::DatabaseUnavailable(other.to_string()),
        })
    }

    async fn find_doctor(&self, patient_id: i32) -> Result<Doctor, DomainError> {
        let mut conn = self.acquire().await?;
        self.fetch_doctor_for_patient(&mut conn, patient_id).await
    }

    async fn get_doctor(&self, doctor_id: i32) -> Result<Doctor, DomainError> {
        let row = sqlx::query("CALL get_doctor(?)")
            .bind(doctor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(transport_error)?;

        match row {
            Some(row) => row_to_doctor(&row),
            None => Err(DomainError::DoctorNotFound),
        }
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, DomainError> {
        let rows = sqlx::query("CALL get_doctors()")
            .fetch_all(&self.pool)
            .await
            .map_err(transport_error)?;

        rows.iter().map(row_to_doctor).collect()
    }

    async fn list_certifications(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<Certification>, DomainError> {
        let rows = sqlx::query("CALL get_certifications_doctor(?)")
            .bind(doctor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(transport_error)?;

        rows.iter().map(row_to_certification).collect()
    }

    async fn list_bookings(&self, patient_id: i32) -> Result<Vec<Booking>, DomainError> {
        let rows = sqlx::query("CALL get_bookings_patient(?)")
            .bind(patient_id)
            .fetch_all(&self.pool)
            .await
            .map_err(transport_error)?;

        rows.iter().map(row_to_booking).collect()
    }

    async fn delete_patient(&self, patient_id: i32) -> Result<(), DomainError> {
        // Deleting an absent row is success; only transport failures
        // surface.
        sqlx::query("CALL delete_patient(?)")
            .bind(patient_id)
            .execute(&self.pool)
            .await
            .map_err(transport_error)?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn require_id(patient: &Patient) -> Result<i32, DomainError> {
    patient.id.ok_or(DomainError::PatientNotFound)
}

fn transport_error(err: sqlx::Error) -> DomainError {
    DomainError::DatabaseUnavailable(err.to_string())
}

/// Maps insert failures, singling out the email uniqueness violation
/// (MySQL 1062).
///
/// Only a duplicate-key error becomes `EmailAlreadyInUse`. Matching the
/// whole SQLSTATE 23000 class would misreport foreign-key (1452) and
/// NOT NULL (1048) failures as a taken email.
fn insert_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(ref db) = err {
        if db.is_unique_violation() {
            return DomainError::EmailAlreadyInUse;
        }
    }
    transport_error(err)
}

/// Reads one column, mapping a missing column or a type mismatch to
/// `CorruptRow`. A `MySqlRow` cannot be constructed without a live
/// connection, so the decode-failure branch is only reachable under
/// live-database testing.
fn column<'r, T>(row: &'r MySqlRow, entity: &'static str, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name).map_err(|_| DomainError::CorruptRow {
        entity,
        column: name.to_string(),
    })
}

fn row_to_patient(row: &MySqlRow) -> Result<Patient, DomainError> {
    Ok(Patient {
        id: Some(column(row, "patient", "id_patient")?),
        email: column(row, "patient", "email")?,
        password_hash: column(row, "patient", "password")?,
        first_name: column(row, "patient", "first_name")?,
        middle_name: column::<Option<String>>(row, "patient", "middle_name")?,
        last_name: column(row, "patient", "last_name")?,
        date_of_birth: column::<NaiveDate>(row, "patient", "date_of_birth")?,
        gender: column(row, "patient", "gender")?,
        phone: column(row, "patient", "telephone_number")?,
    })
}

fn row_to_doctor(row: &MySqlRow) -> Result<Doctor, DomainError> {
    Ok(Doctor {
        id: column(row, "doctor", "id_doctor")?,
        email: column(row, "doctor", "email")?,
        first_name: column(row, "doctor", "first_name")?,
        middle_name: column::<Option<String>>(row, "doctor", "middle_name")?,
        last_name: column(row, "doctor", "last_name")?,
        date_of_birth: column::<NaiveDate>(row, "doctor", "date_of_birth")?,
        gender: column(row, "doctor", "gender")?,
        phone: column(row, "doctor", "telephone_number")?,
    })
}

fn row_to_certification(row: &MySqlRow) -> Result<Certification, DomainError> {
    Ok(Certification {
        doctor_id: column(row, "certification", "id_doctor")?,
        cert_id: column(row, "certification", "id_cert")?,
        name: column(row, "certification", "name")?,
        field: column(row, "certification", "field")?,
        date_obtained: column::<NaiveDate>(row, "certification", "dateObtained")?,
    })
}

fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
    Ok(Booking {
        booking_id: column(row, "booking", "id_booking")?,
        patient_id: column(row, "booking", "id_patient")?,
        doctor_id: column(row, "booking", "id_doctor")?,
        booking_time: column::<NaiveDateTime>(row, "booking", "booking_time")?,
    })
}
