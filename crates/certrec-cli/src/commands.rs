use anyhow::Result;
use tracing::{info, info_span};

use certrec_cli::pipeline::{
    load_attendance, load_config, load_snapshots, reconcile_participants, reconcile_programs,
    reconcile_schedules, write_artifact, write_json_report,
};
use certrec_config::ReconcilerConfig;
use certrec_model::MasterSnapshots;
use certrec_script::{
    ScriptMeta, insertable_participants, insertable_programs, insertable_schedules,
    participant_script, program_script, schedule_script,
};

use crate::cli::{CommonArgs, ConfigArgs, SheetArgs};
use crate::summary::{
    print_category_table, print_participant_report, print_program_report, print_run_summary,
    print_schedule_report,
};

const PROGRAMS_SCRIPT: &str = "insert_programs.sql";
const SCHEDULES_SCRIPT: &str = "insert_schedules.sql";
const PARTICIPANTS_SCRIPT: &str = "insert_participants.sql";

fn load_run_inputs(common: &CommonArgs) -> Result<(ReconcilerConfig, MasterSnapshots)> {
    let config = load_config(common.config.as_deref())?;
    let snapshots = load_snapshots(&common.master_dir)?;
    Ok((config, snapshots))
}

pub fn run_programs(args: &CommonArgs) -> Result<()> {
    let span = info_span!("programs");
    let _guard = span.enter();

    let (config, snapshots) = load_run_inputs(args)?;
    let decisions = reconcile_programs(&config, &snapshots);

    if let Some(path) = &args.report_json {
        write_json_report(path, &decisions)?;
    }

    if args.dry_run {
        print_program_report(&decisions);
        return Ok(());
    }

    let to_insert = insertable_programs(&decisions);
    if to_insert.is_empty() {
        println!("No new programs to insert, or all new programs are uncategorized.");
        return Ok(());
    }

    let meta = script_meta(args, PROGRAMS_SCRIPT);
    let path = write_artifact(&args.output_dir, PROGRAMS_SCRIPT, &program_script(&decisions, &meta))?;
    info!(path = %path.display(), units = to_insert.len(), "program script written");
    println!(
        "SQL generated for {} new programs.\nFile saved to: {}",
        to_insert.len(),
        path.display()
    );
    Ok(())
}

pub fn run_schedules(args: &SheetArgs) -> Result<()> {
    let span = info_span!("schedules");
    let _guard = span.enter();

    let (config, snapshots) = load_run_inputs(&args.common)?;
    let rows = load_attendance(&args.attendance)?;
    let decisions = reconcile_schedules(&config, &rows, &snapshots);

    if let Some(path) = &args.common.report_json {
        write_json_report(path, &decisions)?;
    }

    if args.common.dry_run {
        print_schedule_report(&decisions);
        return Ok(());
    }

    let to_insert = insertable_schedules(&decisions);
    if to_insert.is_empty() {
        println!("No new schedules to insert.");
        return Ok(());
    }

    let meta = script_meta(&args.common, SCHEDULES_SCRIPT);
    let path = write_artifact(
        &args.common.output_dir,
        SCHEDULES_SCRIPT,
        &schedule_script(&decisions, &meta),
    )?;
    info!(path = %path.display(), units = to_insert.len(), "schedule script written");
    println!(
        "SQL generated for {} new schedules.\nFile saved to: {}",
        to_insert.len(),
        path.display()
    );
    Ok(())
}

pub fn run_participants(args: &SheetArgs) -> Result<()> {
    let span = info_span!("participants");
    let _guard = span.enter();

    let (config, snapshots) = load_run_inputs(&args.common)?;
    let rows = load_attendance(&args.attendance)?;
    let run = reconcile_participants(&config, &rows, &snapshots);

    if let Some(path) = &args.common.report_json {
        write_json_report(path, &run.decisions)?;
    }

    if args.common.dry_run {
        print_participant_report(&run.decisions, &run.summary);
        return Ok(());
    }

    let to_insert = insertable_participants(&run.decisions);
    if to_insert.is_empty() {
        println!("No new participants to insert.");
        print_run_summary(&run.summary);
        return Ok(());
    }

    let meta = script_meta(&args.common, PARTICIPANTS_SCRIPT);
    let path = write_artifact(
        &args.common.output_dir,
        PARTICIPANTS_SCRIPT,
        &participant_script(&run.decisions, &meta),
    )?;
    info!(path = %path.display(), units = to_insert.len(), "participant script written");
    println!("SQL written to: {}", path.display());
    print_run_summary(&run.summary);
    Ok(())
}

pub fn run_categories(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print_category_table(&config);
    Ok(())
}

fn script_meta(args: &CommonArgs, file_name: &str) -> ScriptMeta {
    ScriptMeta::now(args.output_dir.join(file_name).display().to_string())
}
