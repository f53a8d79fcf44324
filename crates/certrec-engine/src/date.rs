//! Locale-aware date normalization.
//!
//! Attendance exports carry human-entered Indonesian date strings
//! ("31 Desember 2024"); the master dataset speaks `YYYY-MM-DD`. Everything
//! that uses a date for identity goes through [`DateNormalizer`] first.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use certrec_model::CanonicalDate;

/// Converts locale-formatted date strings into [`CanonicalDate`].
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    /// Lower-cased source month name -> English month name.
    months: BTreeMap<String, String>,
}

impl DateNormalizer {
    pub fn new(months: BTreeMap<String, String>) -> Self {
        Self { months }
    }

    /// Normalizer for the built-in Indonesian month table.
    pub fn indonesian() -> Self {
        Self::new(certrec_config::indonesian_months())
    }

    /// Parses a `"day month-name year"` string into a canonical date.
    ///
    /// The month token is looked up in the locale table; when absent it is
    /// treated as already being an English month name. Returns `None` when
    /// the token count is not exactly three, the month is unrecognized in
    /// either locale, or the triple is not a real calendar date.
    pub fn normalize(&self, raw: &str) -> Option<CanonicalDate> {
        let lowered = raw.trim().to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let [day, month, year] = tokens.as_slice() else {
            debug!(value = raw, "date string does not have three tokens");
            return None;
        };

        let month_name = match self.months.get(*month) {
            Some(english) => english.clone(),
            None => capitalize(month),
        };

        let composed = format!("{day} {month_name} {year}");
        match NaiveDate::parse_from_str(&composed, "%d %B %Y") {
            Ok(date) => Some(CanonicalDate::new(date)),
            Err(_) => {
                debug!(value = raw, "date string did not parse");
                None
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
