//! Schedule reconciliation: collapse raw rows into unique (program,
//! start-date) occurrences and decide new-vs-existing for each.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use certrec_config::ReconcilerConfig;
use certrec_model::{
    AttendanceRow, MasterSnapshots, ResolvedSchedule, ScheduleDecision, ScheduleStatus,
};

use crate::date::DateNormalizer;

/// One group of attendance rows sharing a raw (program, start-date) pair.
#[derive(Debug, Clone)]
struct ScheduleGroup {
    program: String,
    raw_start: String,
    raw_end: String,
}

#[derive(Debug, Clone)]
pub struct ScheduleReconciler {
    dates: DateNormalizer,
}

impl ScheduleReconciler {
    pub fn new(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    pub fn from_config(config: &ReconcilerConfig) -> Self {
        Self::new(DateNormalizer::new(config.months.clone()))
    }

    /// One decision per distinct raw (program, start-date) pair, in first
    /// occurrence order. Later duplicate rows are absorbed into their group;
    /// their end dates are discarded.
    pub fn reconcile(
        &self,
        rows: &[AttendanceRow],
        snapshots: &MasterSnapshots,
    ) -> Vec<ScheduleDecision> {
        group_rows(rows)
            .iter()
            .map(|group| self.decide(group, snapshots))
            .collect()
    }

    fn decide(&self, group: &ScheduleGroup, snapshots: &MasterSnapshots) -> ScheduleDecision {
        let start = self.dates.normalize(&group.raw_start);
        let end = self.dates.normalize(&group.raw_end);

        let status = match (start, end) {
            (Some(start), Some(end)) => match snapshots.lookup_program(&group.program) {
                Some(program) => {
                    let resolved = ResolvedSchedule {
                        program: program.id,
                        category: program.category,
                        start,
                        end,
                    };
                    if snapshots.schedule_exists(&resolved.key()) {
                        ScheduleStatus::Exists(resolved)
                    } else {
                        ScheduleStatus::New(resolved)
                    }
                }
                None => {
                    debug!(program = group.program.as_str(), "program not in master data");
                    ScheduleStatus::ProgramNotFound
                }
            },
            _ => {
                warn!(
                    program = group.program.as_str(),
                    start = group.raw_start.as_str(),
                    end = group.raw_end.as_str(),
                    "could not parse schedule dates"
                );
                ScheduleStatus::InvalidDate
            }
        };

        ScheduleDecision {
            program_name: group.program.clone(),
            raw_start: group.raw_start.clone(),
            raw_end: group.raw_end.clone(),
            status,
        }
    }
}

/// First occurrence per raw (program, start-date) key wins. Rows missing a
/// program, start or end value never form a group; that is an ingestion
/// shape concern, not a decision.
fn group_rows(rows: &[AttendanceRow]) -> Vec<ScheduleGroup> {
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut groups = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        if row.program.is_empty() || row.start_date.is_empty() || row.certificate_date.is_empty() {
            dropped += 1;
            continue;
        }
        let key = (row.program.clone(), row.start_date.clone());
        if seen.insert(key) {
            groups.push(ScheduleGroup {
                program: row.program.clone(),
                raw_start: row.start_date.clone(),
                raw_end: row.certificate_date.clone(),
            });
        }
    }

    if dropped > 0 {
        debug!(rows = dropped, "rows without program or dates were skipped");
    }
    groups
}
