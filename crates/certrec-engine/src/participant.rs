//! Participant reconciliation: resolve each attendance row through
//! program -> schedule -> duplicate check, pairing every insert with a
//! certificate creation unit.

use tracing::debug;

use certrec_config::ReconcilerConfig;
use certrec_model::{
    AttendanceRow, MasterSnapshots, ParticipantDecision, ParticipantInsert, ParticipantKey,
    ParticipantStatus, RunSummary, ScheduleKey,
};

use crate::date::DateNormalizer;

/// Result of a participant reconciliation pass: one decision per input row
/// plus run-level counters consistent with the decision fold.
#[derive(Debug, Clone)]
pub struct ParticipantRun {
    pub decisions: Vec<ParticipantDecision>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone)]
pub struct ParticipantReconciler {
    dates: DateNormalizer,
}

impl ParticipantReconciler {
    pub fn new(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    pub fn from_config(config: &ReconcilerConfig) -> Self {
        Self::new(DateNormalizer::new(config.months.clone()))
    }

    /// Processes every row independently; no grouping or deduplication of
    /// the rows themselves. Every row yields exactly one decision.
    pub fn reconcile(&self, rows: &[AttendanceRow], snapshots: &MasterSnapshots) -> ParticipantRun {
        let mut decisions = Vec::with_capacity(rows.len());
        let mut summary = RunSummary::default();

        for row in rows {
            let decision = self.decide(row, snapshots);
            summary.processed += 1;
            match decision.status {
                ParticipantStatus::Insert(_) => summary.inserted += 1,
                ParticipantStatus::InvalidStartDate | ParticipantStatus::AlreadyEnrolled => {
                    summary.skipped += 1;
                }
                ParticipantStatus::ProgramNotFound | ParticipantStatus::ScheduleNotFound => {
                    summary.not_found += 1;
                }
            }
            decisions.push(decision);
        }

        debug!(
            processed = summary.processed,
            inserted = summary.inserted,
            skipped = summary.skipped,
            not_found = summary.not_found,
            "participant reconciliation finished"
        );
        ParticipantRun { decisions, summary }
    }

    fn decide(&self, row: &AttendanceRow, snapshots: &MasterSnapshots) -> ParticipantDecision {
        let participant_name = row.name.trim().to_string();
        let program_name = row.program.trim().to_string();
        let start_date = self.dates.normalize(&row.start_date);
        let issue_date = self.dates.normalize(&row.certificate_date);
        let certificate_ref = certificate_reference(&row.certificate_no, &row.certificate_note);

        let status = self.resolve(&participant_name, &program_name, start_date, snapshots);

        ParticipantDecision {
            participant_name,
            program_name,
            start_date,
            certificate_ref,
            issue_date,
            status,
        }
    }

    fn resolve(
        &self,
        participant_name: &str,
        program_name: &str,
        start_date: Option<certrec_model::CanonicalDate>,
        snapshots: &MasterSnapshots,
    ) -> ParticipantStatus {
        let Some(start) = start_date else {
            return ParticipantStatus::InvalidStartDate;
        };
        let Some(program) = snapshots.lookup_program(program_name) else {
            return ParticipantStatus::ProgramNotFound;
        };
        let key = ScheduleKey::new(program.id, start);
        let Some(schedule) = snapshots.schedule_id(&key) else {
            return ParticipantStatus::ScheduleNotFound;
        };
        if snapshots.participant_exists(&ParticipantKey::new(schedule, participant_name)) {
            return ParticipantStatus::AlreadyEnrolled;
        }
        ParticipantStatus::Insert(ParticipantInsert {
            schedule,
            program: program.id,
            category: program.category,
        })
    }
}

/// Combines the two certificate-reference fragments: both when both are
/// non-empty, else whichever is non-empty. An empty reference passes
/// through as empty; it is not rejected at this layer.
fn certificate_reference(no: &str, note: &str) -> String {
    match (no.is_empty(), note.is_empty()) {
        (false, false) => format!("{no}{note}"),
        (false, true) => no.to_string(),
        (true, _) => note.to_string(),
    }
}
