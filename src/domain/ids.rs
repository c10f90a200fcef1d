//! Domain identifier types with validation
//!
//! The registry is partitioned by [`DayKey`]. A day key is either a run of
//! ASCII digits (typically the day of the month) or the reserved literal
//! `internal`, which holds records ingested from the watched directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved partition for file-ingested records
pub const INTERNAL_DAY_KEY: &str = "internal";

/// Day key newtype wrapper
///
/// # Examples
///
/// ```
/// use queue_notifier::domain::ids::DayKey;
/// use std::str::FromStr;
///
/// let day = DayKey::from_str("17").unwrap();
/// assert_eq!(day.as_str(), "17");
/// assert!(DayKey::from_str("monday").is_err());
/// assert!(DayKey::internal().is_internal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    /// Creates a day key from a numeric string
    ///
    /// Only non-empty runs of ASCII digits are accepted; the reserved
    /// `internal` partition is obtained through [`DayKey::internal`].
    pub fn new(day: impl Into<String>) -> Result<Self, String> {
        let day = day.into();
        if day.is_empty() {
            return Err("Day key cannot be empty".to_string());
        }
        if !day.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid day key '{day}'. Must contain digits only"));
        }
        Ok(Self(day))
    }

    /// The reserved partition for records ingested from files
    pub fn internal() -> Self {
        Self(INTERNAL_DAY_KEY.to_string())
    }

    /// Whether this is the reserved `internal` partition
    pub fn is_internal(&self) -> bool {
        self.0 == INTERNAL_DAY_KEY
    }

    /// Returns the day key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Deserialization goes through the same checks as `new`, plus `internal`
impl TryFrom<String> for DayKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == INTERNAL_DAY_KEY {
            Ok(Self::internal())
        } else {
            Self::new(value)
        }
    }
}

impl From<DayKey> for String {
    fn from(day: DayKey) -> Self {
        day.0
    }
}

impl AsRef<str> for DayKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
