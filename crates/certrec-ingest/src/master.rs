//! Master-data snapshot source.
//!
//! The reconcilers only ever see [`MasterSnapshots`]; where those lookups
//! come from is behind [`MasterSource`]. Each fetch is read-only and called
//! at most once per run, and all fetches must reflect a single consistent
//! point-in-time view of the master dataset.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::info;

use certrec_model::{
    CanonicalDate, CategoryId, MasterSnapshots, ParticipantKey, ProgramId, ProgramRef,
    ScheduleId, ScheduleKey,
};

use crate::error::{IngestError, Result};

/// The five read-only lookup contracts of the master dataset.
pub trait MasterSource {
    /// Lower-cased names of all existing programs.
    fn existing_program_names(&self) -> Result<BTreeSet<String>>;

    /// Lower-cased program name -> id and category id.
    fn programs(&self) -> Result<BTreeMap<String, ProgramRef>>;

    /// Existing (program id, start date) schedule keys.
    fn existing_schedule_keys(&self) -> Result<BTreeSet<ScheduleKey>>;

    /// Schedule key -> schedule id.
    fn schedule_ids(&self) -> Result<BTreeMap<ScheduleKey, ScheduleId>>;

    /// Existing (schedule id, lower-cased name) enrollment keys.
    fn existing_participant_keys(&self) -> Result<BTreeSet<ParticipantKey>>;

    /// Assembles the immutable per-run snapshot set, invoking each fetch
    /// exactly once. Any failure aborts before an artifact is produced.
    fn load_snapshots(&self) -> Result<MasterSnapshots> {
        let snapshots = MasterSnapshots {
            program_names: self.existing_program_names()?,
            programs: self.programs()?,
            schedule_keys: self.existing_schedule_keys()?,
            schedule_ids: self.schedule_ids()?,
            participant_keys: self.existing_participant_keys()?,
        };
        info!(
            programs = snapshots.programs.len(),
            schedules = snapshots.schedule_ids.len(),
            participants = snapshots.participant_keys.len(),
            "master snapshots loaded"
        );
        Ok(snapshots)
    }
}

/// Master-table export file: `id,name,category_id`.
pub const PROGRAMS_FILE: &str = "programs.csv";
/// Master-table export file: `id,program_id,date_start`.
pub const SCHEDULES_FILE: &str = "schedules.csv";
/// Master-table export file: `schedule_id,name`.
pub const PARTICIPANTS_FILE: &str = "participants.csv";

/// [`MasterSource`] over a directory of point-in-time master-table exports.
///
/// The exports are expected to be produced in one transaction-consistent
/// dump; this loader validates shape, not referential integrity.
#[derive(Debug, Clone)]
pub struct CsvMasterExport {
    dir: PathBuf,
}

impl CsvMasterExport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_rows(&self, file: &str, required: &[&str]) -> Result<Vec<BTreeMap<String, String>>> {
        let path = self.dir.join(file);
        read_csv_rows(&path, required)
    }
}

impl MasterSource for CsvMasterExport {
    fn existing_program_names(&self) -> Result<BTreeSet<String>> {
        let rows = self.read_rows(PROGRAMS_FILE, &["name"])?;
        Ok(rows
            .iter()
            .map(|row| field(row, "name").to_lowercase())
            .collect())
    }

    fn programs(&self) -> Result<BTreeMap<String, ProgramRef>> {
        let path = self.dir.join(PROGRAMS_FILE);
        let rows = self.read_rows(PROGRAMS_FILE, &["id", "name", "category_id"])?;
        let mut programs = BTreeMap::new();
        for row in &rows {
            let id = parse_id(&path, "id", field(row, "id"))?;
            let category = parse_id(&path, "category_id", field(row, "category_id"))?;
            programs.insert(
                field(row, "name").to_lowercase(),
                ProgramRef {
                    id: ProgramId::new(id),
                    category: CategoryId::new(category),
                },
            );
        }
        Ok(programs)
    }

    fn existing_schedule_keys(&self) -> Result<BTreeSet<ScheduleKey>> {
        Ok(self.schedule_ids()?.into_keys().collect())
    }

    fn schedule_ids(&self) -> Result<BTreeMap<ScheduleKey, ScheduleId>> {
        let path = self.dir.join(SCHEDULES_FILE);
        let rows = self.read_rows(SCHEDULES_FILE, &["id", "program_id", "date_start"])?;
        let mut schedules = BTreeMap::new();
        for row in &rows {
            let id = parse_id(&path, "id", field(row, "id"))?;
            let program = parse_id(&path, "program_id", field(row, "program_id"))?;
            let start = parse_date(&path, "date_start", field(row, "date_start"))?;
            schedules.insert(
                ScheduleKey::new(ProgramId::new(program), start),
                ScheduleId::new(id),
            );
        }
        Ok(schedules)
    }

    fn existing_participant_keys(&self) -> Result<BTreeSet<ParticipantKey>> {
        let path = self.dir.join(PARTICIPANTS_FILE);
        let rows = self.read_rows(PARTICIPANTS_FILE, &["schedule_id", "name"])?;
        let mut keys = BTreeSet::new();
        for row in &rows {
            let schedule = parse_id(&path, "schedule_id", field(row, "schedule_id"))?;
            keys.insert(ParticipantKey::new(
                ScheduleId::new(schedule),
                field(row, "name"),
            ));
        }
        Ok(keys)
    }
}

fn field<'a>(row: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or_default()
}

fn parse_id(path: &Path, column: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| IngestError::InvalidId {
        path: path.to_path_buf(),
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_date(path: &Path, column: &str, value: &str) -> Result<CanonicalDate> {
    CanonicalDate::parse_canonical(value).map_err(|_| IngestError::InvalidDate {
        path: path.to_path_buf(),
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Reads a headed CSV into per-row column maps, trimming cells and headers.
fn read_csv_rows(path: &Path, required: &[&str]) -> Result<Vec<BTreeMap<String, String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(key) = headers.get(idx) {
                row.insert(key.clone(), value.trim().to_string());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
