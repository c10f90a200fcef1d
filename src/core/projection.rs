//! Projection of internal patient records onto the shared notification view
//!
//! The centralized service only ever sees the schedule time, the patient id,
//! the notification channels and the wait estimate. Everything else stays in
//! the office.

use crate::domain::{NotificationRecord, PatientRecord};

/// Projects one patient record onto its notification record
///
/// # Examples
///
/// ```
/// use queue_notifier::core::projection::project;
/// use queue_notifier::domain::PatientRecord;
///
/// let patient = PatientRecord {
///     patient_id: "p1".to_string(),
///     patient_name: "Jane Roe".to_string(),
///     estimate_minutes: 15,
///     ..Default::default()
/// };
///
/// let shared = project(&patient);
/// assert_eq!(shared.patient_id, "p1");
/// assert_eq!(shared.estimate_minutes, 15);
/// ```
pub fn project(patient: &PatientRecord) -> NotificationRecord {
    NotificationRecord {
        time: patient.time.clone(),
        patient_id: patient.patient_id.clone(),
        notifications: patient.notifications.clone(),
        estimate_minutes: patient.estimate_minutes,
    }
}

/// Projects a sequence of records, preserving order
pub fn project_all(patients: &[PatientRecord]) -> Vec<NotificationRecord> {
    patients.iter().map(project).collect()
}
