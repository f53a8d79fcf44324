use std::collections::{BTreeMap, BTreeSet};

use certrec_engine::{DateNormalizer, ScheduleReconciler};
use certrec_model::{
    AttendanceRow, CanonicalDate, CategoryId, MasterSnapshots, ProgramId, ProgramRef,
    ScheduleStatus, ScheduleKey,
};

fn row(program: &str, start: &str, end: &str) -> AttendanceRow {
    AttendanceRow {
        name: "Budi Santoso".to_string(),
        program: program.to_string(),
        start_date: start.to_string(),
        certificate_date: end.to_string(),
        ..AttendanceRow::default()
    }
}

fn date(value: &str) -> CanonicalDate {
    CanonicalDate::parse_canonical(value).expect("canonical date")
}

fn snapshots() -> MasterSnapshots {
    let program = ProgramRef {
        id: ProgramId::new(5),
        category: CategoryId::new(2),
    };
    MasterSnapshots {
        program_names: BTreeSet::from(["training cma".to_string()]),
        programs: BTreeMap::from([("training cma".to_string(), program)]),
        schedule_keys: BTreeSet::from([ScheduleKey::new(ProgramId::new(5), date("2024-12-31"))]),
        ..MasterSnapshots::default()
    }
}

fn reconciler() -> ScheduleReconciler {
    ScheduleReconciler::new(DateNormalizer::indonesian())
}

#[test]
fn duplicate_raw_keys_collapse_into_one_decision() {
    let rows = vec![
        row("Training CMA", "31 Desember 2024", "2 Januari 2025"),
        row("Training CMA", "31 Desember 2024", "5 Januari 2025"),
        row("Training CMA", "31 Desember 2024", "2 Januari 2025"),
    ];

    let decisions = reconciler().reconcile(&rows, &snapshots());
    assert_eq!(decisions.len(), 1);
    // First occurrence wins; the later end dates are absorbed.
    assert_eq!(decisions[0].raw_end, "2 Januari 2025");
}

#[test]
fn existing_key_skips_and_new_key_inserts() {
    let snapshots = snapshots();
    let rows = vec![row("Training CMA", "31 Desember 2024", "2 Januari 2025")];
    let decisions = reconciler().reconcile(&rows, &snapshots);
    match &decisions[0].status {
        ScheduleStatus::Exists(resolved) => {
            assert_eq!(resolved.program, ProgramId::new(5));
            assert_eq!(resolved.start, date("2024-12-31"));
        }
        other => panic!("expected Exists, got {other:?}"),
    }
    assert_eq!(decisions[0].action_label(), "Skip");

    let rows = vec![row("Training CMA", "1 Januari 2025", "3 Januari 2025")];
    let decisions = reconciler().reconcile(&rows, &snapshots);
    match &decisions[0].status {
        ScheduleStatus::New(resolved) => {
            assert_eq!(resolved.program, ProgramId::new(5));
            assert_eq!(resolved.category, CategoryId::new(2));
            assert_eq!(resolved.start, date("2025-01-01"));
            assert_eq!(resolved.end, date("2025-01-03"));
        }
        other => panic!("expected New, got {other:?}"),
    }
    assert_eq!(decisions[0].action_label(), "Insert");
}

#[test]
fn unparseable_dates_are_invalid_not_fatal() {
    let rows = vec![
        row("Training CMA", "31 Bulananeh 2024", "2 Januari 2025"),
        row("Training CMA", "1 Januari 2025", "not a date"),
    ];
    let decisions = reconciler().reconcile(&rows, &snapshots());
    assert_eq!(decisions.len(), 2);
    assert!(matches!(decisions[0].status, ScheduleStatus::InvalidDate));
    assert!(matches!(decisions[1].status, ScheduleStatus::InvalidDate));
}

#[test]
fn unknown_program_is_not_found() {
    let rows = vec![row("Unknown Course", "31 Desember 2024", "2 Januari 2025")];
    let decisions = reconciler().reconcile(&rows, &snapshots());
    assert!(matches!(decisions[0].status, ScheduleStatus::ProgramNotFound));
    assert_eq!(decisions[0].status_label(), "Program Not Found");
}

#[test]
fn rows_missing_fields_never_form_groups() {
    let rows = vec![
        row("", "31 Desember 2024", "2 Januari 2025"),
        row("Training CMA", "", "2 Januari 2025"),
        row("Training CMA", "31 Desember 2024", ""),
    ];
    let decisions = reconciler().reconcile(&rows, &snapshots());
    assert!(decisions.is_empty());
}

#[test]
fn groups_keep_first_occurrence_order() {
    let rows = vec![
        row("Training CMA", "1 Januari 2025", "3 Januari 2025"),
        row("Training CMA", "31 Desember 2024", "2 Januari 2025"),
        row("Training CMA", "1 Januari 2025", "4 Januari 2025"),
    ];
    let decisions = reconciler().reconcile(&rows, &snapshots());
    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0].raw_start, "1 Januari 2025");
    assert_eq!(decisions[1].raw_start, "31 Desember 2024");
}
