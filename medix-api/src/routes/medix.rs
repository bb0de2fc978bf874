/// Read-only endpoints over the external Medix clinic schema
///
/// # Endpoints
///
/// - `GET /api/medix/patients` - Patients with insurer name (id ascending)
/// - `GET /api/medix/doctors` - Doctors with specialty name (id ascending)
/// - `GET /api/medix/appointments` - Appointments newest first, joined
///   with patient and doctor names
///
/// These views never write; the queries are fixed templates in
/// `medix_shared::medix`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use medix_shared::medix::{self, AppointmentSummary, DoctorSummary, PatientSummary};

/// Lists patients with their insurance provider
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<Json<Vec<PatientSummary>>> {
    let patients = medix::list_patients(&state.db)
        .await
        .map_err(ApiError::db("load patients"))?;

    Ok(Json(patients))
}

/// Lists doctors with their specialty
pub async fn list_doctors(State(state): State<AppState>) -> ApiResult<Json<Vec<DoctorSummary>>> {
    let doctors = medix::list_doctors(&state.db)
        .await
        .map_err(ApiError::db("load doctors"))?;

    Ok(Json(doctors))
}

/// Lists appointments ordered by scheduled time descending
pub async fn list_appointments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AppointmentSummary>>> {
    let appointments = medix::list_appointments(&state.db)
        .await
        .map_err(ApiError::db("load appointments"))?;

    Ok(Json(appointments))
}
