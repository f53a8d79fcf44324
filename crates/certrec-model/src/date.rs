//! Canonical calendar-date representation.
//!
//! `YYYY-MM-DD` is the sole comparison key wherever dates participate in
//! identity (schedule matching). There is no timezone or time-of-day
//! component at this layer.

use std::fmt;

use chrono::NaiveDate;

use crate::error::ModelError;

/// A calendar date rendered as `YYYY-MM-DD` everywhere it leaves the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a date already in canonical form.
    ///
    /// Used for master-data loads, where anything other than `YYYY-MM-DD`
    /// means the export itself is malformed.
    pub fn parse_canonical(value: &str) -> Result<Self, ModelError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ModelError::InvalidCanonicalDate(value.to_string()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl serde::Serialize for CanonicalDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CanonicalDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse_canonical(&value).map_err(serde::de::Error::custom)
    }
}
