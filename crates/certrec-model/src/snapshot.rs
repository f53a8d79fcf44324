//! Point-in-time lookup state for one reconciliation run.
//!
//! All master-data lookups are loaded once at the start of a run and are
//! read-only afterwards; the snapshot is the sole source of truth for
//! "does X already exist" during that run. Concurrent external writes are
//! not observed.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::ids::{CategoryId, ProgramId, ScheduleId};
use crate::keys::{ParticipantKey, ScheduleKey};

/// Snapshot view of one master program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramRef {
    pub id: ProgramId,
    /// Category at snapshot time, denormalized onto schedules at creation.
    pub category: CategoryId,
}

/// Immutable lookup snapshots for one run.
#[derive(Debug, Clone, Default)]
pub struct MasterSnapshots {
    /// Lower-cased names of all existing programs.
    pub program_names: BTreeSet<String>,
    /// Lower-cased program name -> id and category.
    pub programs: BTreeMap<String, ProgramRef>,
    /// Existing (program, start-date) schedule keys.
    pub schedule_keys: BTreeSet<ScheduleKey>,
    /// Schedule key -> schedule id.
    pub schedule_ids: BTreeMap<ScheduleKey, ScheduleId>,
    /// Existing (schedule, normalized name) enrollment keys.
    pub participant_keys: BTreeSet<ParticipantKey>,
}

impl MasterSnapshots {
    /// Case-insensitive program-name membership test.
    pub fn program_exists(&self, name: &str) -> bool {
        self.program_names.contains(&name.trim().to_lowercase())
    }

    /// Resolves a program by its lower-cased name.
    pub fn lookup_program(&self, name: &str) -> Option<ProgramRef> {
        self.programs.get(&name.trim().to_lowercase()).copied()
    }

    pub fn schedule_exists(&self, key: &ScheduleKey) -> bool {
        self.schedule_keys.contains(key)
    }

    pub fn schedule_id(&self, key: &ScheduleKey) -> Option<ScheduleId> {
        self.schedule_ids.get(key).copied()
    }

    pub fn participant_exists(&self, key: &ParticipantKey) -> bool {
        self.participant_keys.contains(key)
    }
}
