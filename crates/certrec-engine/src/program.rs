//! Program reconciliation: decide new-vs-existing for candidate names.

use tracing::debug;

use certrec_config::ReconcilerConfig;
use certrec_model::{MasterSnapshots, ProgramDecision, ProgramStatus};

use crate::classify::CategoryClassifier;
use crate::slug::slugify;

/// Decides, per candidate program name, whether it already exists in the
/// master set; new names get a predicted category and a derived slug.
#[derive(Debug, Clone)]
pub struct ProgramReconciler {
    classifier: CategoryClassifier,
}

impl ProgramReconciler {
    pub fn new(classifier: CategoryClassifier) -> Self {
        Self { classifier }
    }

    pub fn from_config(config: &ReconcilerConfig) -> Self {
        Self::new(CategoryClassifier::from_config(config))
    }

    /// One decision per candidate, in candidate order. Candidates are only
    /// checked against the snapshot, never against each other: two new names
    /// in one run may collide on slug.
    pub fn reconcile(
        &self,
        candidates: &[String],
        snapshots: &MasterSnapshots,
    ) -> Vec<ProgramDecision> {
        candidates
            .iter()
            .map(|name| self.decide(name, snapshots))
            .collect()
    }

    fn decide(&self, name: &str, snapshots: &MasterSnapshots) -> ProgramDecision {
        let trimmed = name.trim();
        let normalized = trimmed.to_lowercase();
        let status = if snapshots.program_names.contains(&normalized) {
            ProgramStatus::Exists
        } else {
            let prediction = self.classifier.classify(&normalized);
            debug!(
                name = trimmed,
                category = prediction.category.as_str(),
                "candidate program is new"
            );
            ProgramStatus::New(prediction)
        };
        ProgramDecision {
            name: trimmed.to_string(),
            slug: slugify(trimmed),
            status,
        }
    }
}
