//! In-memory patient registry
//!
//! Holds the office queue as an ordered list of [`PatientRecord`]s per
//! [`DayKey`]. The map lives behind a single `RwLock`; each operation holds
//! the lock only for its own duration and never across an await point, so
//! forwarding can happen after the lock is released.

use crate::domain::{DayKey, PatientRecord};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, cloneable handle to the patient registry
///
/// # Example
///
/// ```
/// use queue_notifier::core::registry::PatientRegistry;
/// use queue_notifier::domain::{DayKey, PatientRecord};
///
/// let registry = PatientRegistry::new();
/// let day = DayKey::new("3").unwrap();
///
/// registry.append(&day, PatientRecord { patient_id: "p1".into(), ..Default::default() });
/// assert_eq!(registry.list(&day).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatientRegistry {
    days: Arc<RwLock<HashMap<DayKey, Vec<PatientRecord>>>>,
}

impl PatientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the day's queue
    ///
    /// Duplicate patient ids are kept; patients may reappear on the same day.
    pub fn append(&self, day: &DayKey, record: PatientRecord) {
        let mut days = self.write();
        days.entry(day.clone()).or_default().push(record);
        tracing::debug!(day = %day, queued = days[day].len(), "Patient appended");
    }

    /// Current queue for a day
    ///
    /// Returns `None` when the day has never been written. A day that was
    /// written and emptied returns `Some` of an empty list.
    pub fn list(&self, day: &DayKey) -> Option<Vec<PatientRecord>> {
        self.read().get(day).cloned()
    }

    /// Remove every record with the given patient id
    ///
    /// The remaining records keep their relative order. The day is created
    /// (empty) when it did not exist. Returns the remaining queue.
    pub fn remove_by_id(&self, day: &DayKey, patient_id: &str) -> Vec<PatientRecord> {
        let mut days = self.write();
        let queue = days.entry(day.clone()).or_default();
        let before = queue.len();
        queue.retain(|record| record.patient_id != patient_id);

        tracing::debug!(
            day = %day,
            patient_id = patient_id,
            removed = before - queue.len(),
            "Patients removed"
        );

        queue.clone()
    }

    /// Replace the whole queue for a day
    pub fn replace(&self, day: &DayKey, records: Vec<PatientRecord>) {
        let count = records.len();
        self.write().insert(day.clone(), records);
        tracing::debug!(day = %day, queued = count, "Day replaced");
    }

    /// Number of queued records for a day (0 for unknown days)
    pub fn len(&self, day: &DayKey) -> usize {
        self.read().get(day).map_or(0, Vec::len)
    }

    /// Whether no day holds any record
    pub fn is_empty(&self) -> bool {
        self.read().values().all(Vec::is_empty)
    }

    /// All day keys that have been written, sorted
    pub fn day_keys(&self) -> Vec<DayKey> {
        let mut keys: Vec<DayKey> = self.read().keys().cloned().collect();
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        keys
    }

    // No operation leaves a queue half-modified, so poisoned locks are usable
    fn read(&self) -> RwLockReadGuard<'_, HashMap<DayKey, Vec<PatientRecord>>> {
        self.days.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<DayKey, Vec<PatientRecord>>> {
        self.days.write().unwrap_or_else(PoisonError::into_inner)
    }
}
