//! Reconciliation run orchestration, kept in the library so integration
//! tests can drive the same code paths as the binary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use certrec_config::ReconcilerConfig;
use certrec_engine::{
    ParticipantReconciler, ParticipantRun, ProgramReconciler, ScheduleReconciler,
};
use certrec_ingest::{CsvMasterExport, MasterSource, read_attendance};
use certrec_model::{AttendanceRow, MasterSnapshots, ProgramDecision, ScheduleDecision};

/// Loads the run configuration, falling back to the default location.
pub fn load_config(path: Option<&Path>) -> Result<ReconcilerConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => certrec_config::default_config_path(),
    };
    let config = certrec_config::load_config(&path)
        .with_context(|| format!("load config {}", path.display()))?;
    info!(
        categories = config.categories.len(),
        rules = config.rules.len(),
        candidates = config.new_programs.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Loads the immutable master snapshots for this run. Any failure here is
/// fatal: nothing may be written from a partial view.
pub fn load_snapshots(master_dir: &Path) -> Result<MasterSnapshots> {
    CsvMasterExport::new(master_dir)
        .load_snapshots()
        .with_context(|| format!("load master snapshots from {}", master_dir.display()))
}

/// Loads the attendance export rows.
pub fn load_attendance(path: &Path) -> Result<Vec<AttendanceRow>> {
    let rows = read_attendance(path)
        .with_context(|| format!("read attendance export {}", path.display()))?;
    info!(rows = rows.len(), "attendance export loaded");
    Ok(rows)
}

/// Program reconciliation over the configured candidate list.
pub fn reconcile_programs(
    config: &ReconcilerConfig,
    snapshots: &MasterSnapshots,
) -> Vec<ProgramDecision> {
    let decisions =
        ProgramReconciler::from_config(config).reconcile(&config.new_programs, snapshots);
    info!(candidates = decisions.len(), "program reconciliation finished");
    decisions
}

/// Schedule reconciliation over attendance rows.
pub fn reconcile_schedules(
    config: &ReconcilerConfig,
    rows: &[AttendanceRow],
    snapshots: &MasterSnapshots,
) -> Vec<ScheduleDecision> {
    let decisions = ScheduleReconciler::from_config(config).reconcile(rows, snapshots);
    info!(groups = decisions.len(), "schedule reconciliation finished");
    decisions
}

/// Participant reconciliation over attendance rows.
pub fn reconcile_participants(
    config: &ReconcilerConfig,
    rows: &[AttendanceRow],
    snapshots: &MasterSnapshots,
) -> ParticipantRun {
    let run = ParticipantReconciler::from_config(config).reconcile(rows, snapshots);
    info!(
        processed = run.summary.processed,
        inserted = run.summary.inserted,
        skipped = run.summary.skipped,
        not_found = run.summary.not_found,
        "participant reconciliation finished"
    );
    run
}

/// Writes a generated artifact, creating the output directory on demand.
pub fn write_artifact(dir: &Path, file_name: &str, content: &str) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory {}", dir.display()))?;
    let path = dir.join(file_name);
    std::fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Writes a decision report as pretty-printed JSON.
pub fn write_json_report<T: serde::Serialize>(path: &Path, decisions: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(decisions).context("serialize decision report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
