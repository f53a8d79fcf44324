//! Per-unit reconciliation outcomes.
//!
//! A decision is reporting data first: every input unit produces exactly one,
//! regardless of outcome, and only the actionable variants carry the resolved
//! identifiers needed to build a mutation unit. Non-actionable variants are
//! never upgraded into mutations downstream.

use serde::Serialize;

use crate::date::CanonicalDate;
use crate::ids::{CategoryId, ProgramId, ScheduleId};
use crate::keys::ScheduleKey;

/// Sentinel category for names no rule matched. Not an error: it is a valid
/// decision state that cannot be inserted without manual intervention.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category predicted for a new program name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPrediction {
    pub category: String,
    /// `None` when the prediction is [`UNCATEGORIZED`] or the category has
    /// no configured id.
    pub category_id: Option<CategoryId>,
}

impl CategoryPrediction {
    pub fn uncategorized() -> Self {
        Self {
            category: UNCATEGORIZED.to_string(),
            category_id: None,
        }
    }
}

/// Outcome for one candidate program name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ProgramStatus {
    /// Present (case-insensitively) in the master snapshot; no action.
    Exists,
    /// Absent from the snapshot; insert-eligible once a category resolves.
    New(CategoryPrediction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramDecision {
    /// Candidate name as supplied (original casing).
    pub name: String,
    /// URL-safe display key derived from the original name.
    pub slug: String,
    pub status: ProgramStatus,
}

impl ProgramDecision {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            ProgramStatus::Exists => "Exists",
            ProgramStatus::New(_) => "New",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.status {
            ProgramStatus::Exists => "Skip",
            ProgramStatus::New(_) => "Insert",
        }
    }
}

/// Fully resolved (program, dates) pair for a schedule group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSchedule {
    pub program: ProgramId,
    pub category: CategoryId,
    pub start: CanonicalDate,
    pub end: CanonicalDate,
}

impl ResolvedSchedule {
    pub fn key(&self) -> ScheduleKey {
        ScheduleKey::new(self.program, self.start)
    }
}

/// Outcome for one distinct (program, raw start date) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ScheduleStatus {
    /// Start or end date did not normalize.
    InvalidDate,
    /// Program name absent from the master snapshot.
    ProgramNotFound,
    /// (program, start) already present in the master snapshot.
    Exists(ResolvedSchedule),
    /// Insert-eligible occurrence.
    New(ResolvedSchedule),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDecision {
    pub program_name: String,
    /// Raw start-date string the group was keyed by.
    pub raw_start: String,
    pub raw_end: String,
    pub status: ScheduleStatus,
}

impl ScheduleDecision {
    pub fn resolved(&self) -> Option<&ResolvedSchedule> {
        match &self.status {
            ScheduleStatus::Exists(resolved) | ScheduleStatus::New(resolved) => Some(resolved),
            _ => None,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            ScheduleStatus::InvalidDate => "Invalid Date",
            ScheduleStatus::ProgramNotFound => "Program Not Found",
            ScheduleStatus::Exists(_) => "Exists",
            ScheduleStatus::New(_) => "New",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.status {
            ScheduleStatus::New(_) => "Insert",
            _ => "Skip",
        }
    }
}

/// Resolved identifiers for one participant+certificate mutation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticipantInsert {
    pub schedule: ScheduleId,
    pub program: ProgramId,
    pub category: CategoryId,
}

/// Outcome for one attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ParticipantStatus {
    /// Schedule start date missing or unparseable.
    InvalidStartDate,
    ProgramNotFound,
    /// No schedule exists for the resolved program and date.
    ScheduleNotFound,
    /// (schedule, name) already enrolled; expected steady state on re-runs.
    AlreadyEnrolled,
    Insert(ParticipantInsert),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantDecision {
    pub participant_name: String,
    pub program_name: String,
    /// Normalized schedule start date, when it parsed.
    pub start_date: Option<CanonicalDate>,
    /// Combined certificate reference; may legitimately be empty.
    pub certificate_ref: String,
    /// Certificate issue date; `None` when not yet certified.
    pub issue_date: Option<CanonicalDate>,
    pub status: ParticipantStatus,
}

impl ParticipantDecision {
    pub fn status_label(&self) -> &'static str {
        match self.status {
            ParticipantStatus::InvalidStartDate | ParticipantStatus::AlreadyEnrolled => "Skipped",
            ParticipantStatus::ProgramNotFound | ParticipantStatus::ScheduleNotFound => {
                "Not Found"
            }
            ParticipantStatus::Insert(_) => "To Be Inserted",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.status {
            ParticipantStatus::InvalidStartDate => "Invalid schedule start date",
            ParticipantStatus::ProgramNotFound => "Program not found in master data",
            ParticipantStatus::ScheduleNotFound => "Schedule not found for this program and date",
            ParticipantStatus::AlreadyEnrolled => "Participant already exists for this schedule",
            ParticipantStatus::Insert(_) => "Participant and Certificate records generated",
        }
    }
}

/// Run-level counters for the participant pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub not_found: usize,
}

impl RunSummary {
    /// Folds the per-row outcomes back into counters. The engine keeps its
    /// own tallies while processing; the two must always agree.
    pub fn from_decisions(decisions: &[ParticipantDecision]) -> Self {
        let mut summary = Self {
            processed: decisions.len(),
            ..Self::default()
        };
        for decision in decisions {
            match decision.status {
                ParticipantStatus::Insert(_) => summary.inserted += 1,
                ParticipantStatus::InvalidStartDate | ParticipantStatus::AlreadyEnrolled => {
                    summary.skipped += 1;
                }
                ParticipantStatus::ProgramNotFound | ParticipantStatus::ScheduleNotFound => {
                    summary.not_found += 1;
                }
            }
        }
        summary
    }
}
