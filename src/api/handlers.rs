//! Queue endpoints
//!
//! Every mutating handler follows the same sequence: decode the body,
//! validate the day, mutate the registry, project and forward, then redirect
//! the client to the day's view. Forwards are queued, so the response never
//! waits for the centralized service.

use super::error::ApiError;
use super::state::AppState;
use crate::core::projection::{project, project_all};
use crate::domain::{DayKey, PatientRecord};
use crate::log_registry_miss;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Content type of the view endpoint
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// `GET /view/:day` - the day's queue with all internal fields
pub async fn view(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Response, ApiError> {
    let day = parse_day(&day)?;

    let patients = state.registry.list(&day).unwrap_or_else(|| {
        log_registry_miss!(day);
        Vec::new()
    });

    let body = serde_json::to_string(&patients).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

/// `POST /addPatient/:day` - append one patient
pub async fn add_patient(
    State(state): State<AppState>,
    Path(day): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let day = parse_day(&day)?;
    let patient: PatientRecord = serde_json::from_slice(&body)?;

    let shared = project(&patient);
    tracing::info!(day = %day, patient_id = %patient.patient_id, "Adding patient");
    state.registry.append(&day, patient);
    state.forwarder.send_record(&day, &shared);

    Ok(redirect_to_view(&day))
}

/// `POST /deletePatient/:day/:patient_id` - remove every record with that id
pub async fn delete_patient(
    State(state): State<AppState>,
    Path((day, patient_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let day = parse_day(&day)?;

    let remaining = state.registry.remove_by_id(&day, &patient_id);
    tracing::info!(
        day = %day,
        patient_id = %patient_id,
        remaining = remaining.len(),
        "Deleting patient"
    );
    state.forwarder.send_delete(&day, &patient_id);

    Ok(redirect_to_view(&day))
}

/// `POST /addList/:day` - replace the whole day
pub async fn add_list(
    State(state): State<AppState>,
    Path(day): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let day = parse_day(&day)?;
    let patients: Vec<PatientRecord> = serde_json::from_slice(&body)?;

    let shared = project_all(&patients);
    tracing::info!(day = %day, count = patients.len(), "Replacing patient list");
    state.registry.replace(&day, patients);
    state.forwarder.send_bulk(&day, &shared);

    Ok(redirect_to_view(&day))
}

/// Location of the view for a day
pub fn view_path(day: &DayKey) -> String {
    format!("/view/{day}")
}

fn redirect_to_view(day: &DayKey) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, view_path(day))],
    )
        .into_response()
}

// Only numeric days are routable; `internal` is reachable from ingestion only
fn parse_day(raw: &str) -> Result<DayKey, ApiError> {
    DayKey::new(raw).map_err(ApiError::NotFound)
}
