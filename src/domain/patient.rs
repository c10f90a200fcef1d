//! Patient domain models
//!
//! [`PatientRecord`] is the full internal record kept by the office.
//! [`NotificationRecord`] is the redacted view shared with the centralized
//! service; it is produced by [`crate::core::projection`] and never stored.
//!
//! JSON keys follow the office software's wire format (`patientId`,
//! `estimatedInMinutes`, `potentialCOVID-19`, ...). Missing keys decode to
//! their zero value.

use serde::{Deserialize, Serialize};

/// One alert channel for a patient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Channel tag, e.g. `sms` or `push`
    #[serde(rename = "type")]
    pub kind: String,

    /// Channel-specific address (phone number, device token)
    pub identifier: String,
}

/// Internal patient record with full fidelity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    /// Free-form schedule time
    pub time: String,

    #[serde(rename = "patientId")]
    pub patient_id: String,

    #[serde(rename = "patientName")]
    pub patient_name: String,

    #[serde(rename = "patientDoB")]
    pub patient_dob: String,

    pub notifications: Vec<Notification>,

    /// Estimated wait in minutes
    #[serde(rename = "estimatedInMinutes")]
    pub estimate_minutes: i64,

    pub urgent: bool,

    #[serde(rename = "potentialCOVID-19")]
    pub covid_suspected: bool,

    #[serde(rename = "queuingApp")]
    pub queuing_app: bool,
}

/// Redacted record forwarded to the centralized service
///
/// Carries no name, date of birth or clinical flags. Field order is the
/// serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub time: String,

    #[serde(rename = "patientId")]
    pub patient_id: String,

    pub notifications: Vec<Notification>,

    #[serde(rename = "estimatedInMinutes")]
    pub estimate_minutes: i64,
}
