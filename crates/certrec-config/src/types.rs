use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use certrec_model::CategoryId;

/// One ordered categorization rule: first category whose keyword set hits
/// wins, so list position is a priority, not a preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    /// Keywords matched as whole words, case-insensitively. May contain
    /// spaces or hyphens ("public speaking", "gen-z").
    pub keywords: Vec<String>,
}

/// The full configuration surface consumed by the reconcilers.
///
/// Loaded once and passed by reference into each reconciler at construction;
/// there is no process-wide mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Category name -> master category id.
    pub categories: BTreeMap<String, CategoryId>,

    /// Ordered keyword rules for category prediction.
    #[serde(default)]
    pub rules: Vec<CategoryRule>,

    /// Locale month table (lower-cased source month -> English month name).
    /// Defaults to the Indonesian table when omitted.
    #[serde(default = "indonesian_months")]
    pub months: BTreeMap<String, String>,

    /// Candidate names for program reconciliation mode.
    #[serde(default)]
    pub new_programs: Vec<String>,
}

impl ReconcilerConfig {
    pub fn category_id(&self, category: &str) -> Option<CategoryId> {
        self.categories.get(category).copied()
    }
}

/// The built-in Indonesian month table.
pub fn indonesian_months() -> BTreeMap<String, String> {
    [
        ("januari", "January"),
        ("februari", "February"),
        ("maret", "March"),
        ("april", "April"),
        ("mei", "May"),
        ("juni", "June"),
        ("juli", "July"),
        ("agustus", "August"),
        ("september", "September"),
        ("oktober", "October"),
        ("november", "November"),
        ("desember", "December"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}
