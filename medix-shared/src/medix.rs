//! Read-only views over the external Medix clinic schema.
//!
//! The clinic tables (`patient`, `doctor`, `specialty`,
//! `insurance_provider`, `appointment`) are owned by an external system
//! and are never written by this API. Access goes through a fixed set of
//! named query templates; no caller input is ever interpolated into the
//! SQL, and the only bind parameters are the templates' own.
//!
//! Expected external layout (not owned here):
//!
//! ```sql
//! CREATE TABLE patient (
//!     id SERIAL PRIMARY KEY,
//!     full_name VARCHAR(255) NOT NULL,
//!     email VARCHAR(255) NOT NULL,
//!     birth_date DATE NOT NULL,
//!     insurance_provider_id INTEGER REFERENCES insurance_provider(id)
//! );
//!
//! CREATE TABLE appointment (
//!     id SERIAL PRIMARY KEY,
//!     patient_id INTEGER NOT NULL REFERENCES patient(id),
//!     doctor_id INTEGER NOT NULL REFERENCES doctor(id),
//!     scheduled_at TIMESTAMPTZ NOT NULL,
//!     reason TEXT NOT NULL,
//!     status_code INTEGER NOT NULL
//! );
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Patient row joined with the insurance provider name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    /// Patient ID in the clinic schema
    pub id: i32,

    /// Patient full name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Insurance provider name, empty string when uninsured
    pub insurer_name: String,
}

/// Doctor row joined with the specialty name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    /// Doctor ID in the clinic schema
    pub id: i32,

    /// Doctor full name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Specialty name, empty string when unassigned
    pub specialty_name: String,
}

/// Appointment row joined with patient and doctor names
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    /// Appointment ID in the clinic schema
    pub id: i32,

    /// When the appointment is scheduled
    pub scheduled_at: DateTime<Utc>,

    /// Visit reason
    pub reason: String,

    /// Clinic status code
    pub status_code: i32,

    /// Full name of the referenced patient (inner join, never null)
    pub patient_name: String,

    /// Full name of the referenced doctor (inner join, never null)
    pub doctor_name: String,
}

const LIST_PATIENTS_SQL: &str = r#"
SELECT p.id,
       p.full_name,
       p.email,
       p.birth_date,
       COALESCE(i.name, '') AS insurer_name
FROM patient p
LEFT JOIN insurance_provider i ON i.id = p.insurance_provider_id
ORDER BY p.id ASC
"#;

const LIST_DOCTORS_SQL: &str = r#"
SELECT d.id,
       d.full_name,
       d.email,
       COALESCE(s.name, '') AS specialty_name
FROM doctor d
LEFT JOIN specialty s ON s.id = d.specialty_id
ORDER BY d.id ASC
"#;

const LIST_APPOINTMENTS_SQL: &str = r#"
SELECT a.id,
       a.scheduled_at,
       a.reason,
       a.status_code,
       p.full_name AS patient_name,
       d.full_name AS doctor_name
FROM appointment a
JOIN patient p ON p.id = a.patient_id
JOIN doctor d ON d.id = a.doctor_id
ORDER BY a.scheduled_at DESC
"#;

/// Lists all patients with their insurer, ordered by id ascending
pub async fn list_patients(pool: &PgPool) -> Result<Vec<PatientSummary>, sqlx::Error> {
    sqlx::query_as::<_, PatientSummary>(LIST_PATIENTS_SQL)
        .fetch_all(pool)
        .await
}

/// Lists all doctors with their specialty, ordered by id ascending
pub async fn list_doctors(pool: &PgPool) -> Result<Vec<DoctorSummary>, sqlx::Error> {
    sqlx::query_as::<_, DoctorSummary>(LIST_DOCTORS_SQL)
        .fetch_all(pool)
        .await
}

/// Lists all appointments newest first, with patient and doctor names
pub async fn list_appointments(pool: &PgPool) -> Result<Vec<AppointmentSummary>, sqlx::Error> {
    sqlx::query_as::<_, AppointmentSummary>(LIST_APPOINTMENTS_SQL)
        .fetch_all(pool)
        .await
}
