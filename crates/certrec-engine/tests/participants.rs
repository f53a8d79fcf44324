use std::collections::{BTreeMap, BTreeSet};

use certrec_engine::{DateNormalizer, ParticipantReconciler};
use certrec_model::{
    AttendanceRow, CanonicalDate, CategoryId, MasterSnapshots, ParticipantKey,
    ParticipantStatus, ProgramId, ProgramRef, RunSummary, ScheduleId, ScheduleKey,
};

fn date(value: &str) -> CanonicalDate {
    CanonicalDate::parse_canonical(value).expect("canonical date")
}

fn snapshots() -> MasterSnapshots {
    let program = ProgramRef {
        id: ProgramId::new(5),
        category: CategoryId::new(2),
    };
    let key = ScheduleKey::new(ProgramId::new(5), date("2024-12-31"));
    MasterSnapshots {
        program_names: BTreeSet::from(["training cma".to_string()]),
        programs: BTreeMap::from([("training cma".to_string(), program)]),
        schedule_keys: BTreeSet::from([key]),
        schedule_ids: BTreeMap::from([(key, ScheduleId::new(9))]),
        participant_keys: BTreeSet::from([ParticipantKey::new(ScheduleId::new(9), "Siti Aminah")]),
    }
}

fn row(name: &str, program: &str, start: &str) -> AttendanceRow {
    AttendanceRow {
        name: name.to_string(),
        program: program.to_string(),
        start_date: start.to_string(),
        certificate_no: "123".to_string(),
        certificate_note: "/CERT/XII/2024".to_string(),
        certificate_date: "2 Januari 2025".to_string(),
    }
}

fn reconciler() -> ParticipantReconciler {
    ParticipantReconciler::new(DateNormalizer::indonesian())
}

#[test]
fn resolves_the_full_outcome_ladder() {
    let rows = vec![
        row("Budi", "Training CMA", "tanggal rusak"),
        row("Budi", "Unknown Course", "31 Desember 2024"),
        row("Budi", "Training CMA", "1 Januari 2025"),
        row("SITI AMINAH", "Training CMA", "31 Desember 2024"),
        row("Budi", "Training CMA", "31 Desember 2024"),
    ];

    let run = reconciler().reconcile(&rows, &snapshots());
    assert_eq!(run.decisions.len(), 5);

    assert!(matches!(
        run.decisions[0].status,
        ParticipantStatus::InvalidStartDate
    ));
    assert_eq!(run.decisions[0].start_date, None);

    assert!(matches!(
        run.decisions[1].status,
        ParticipantStatus::ProgramNotFound
    ));
    assert!(matches!(
        run.decisions[2].status,
        ParticipantStatus::ScheduleNotFound
    ));
    // Duplicate detection is case-insensitive on the name.
    assert!(matches!(
        run.decisions[3].status,
        ParticipantStatus::AlreadyEnrolled
    ));

    match &run.decisions[4].status {
        ParticipantStatus::Insert(insert) => {
            assert_eq!(insert.schedule, ScheduleId::new(9));
            assert_eq!(insert.program, ProgramId::new(5));
            assert_eq!(insert.category, CategoryId::new(2));
        }
        other => panic!("expected Insert, got {other:?}"),
    }
    assert_eq!(run.decisions[4].certificate_ref, "123/CERT/XII/2024");
    assert_eq!(run.decisions[4].issue_date, Some(date("2025-01-02")));

    assert_eq!(run.summary.processed, 5);
    assert_eq!(run.summary.inserted, 1);
    assert_eq!(run.summary.skipped, 2);
    assert_eq!(run.summary.not_found, 2);
}

#[test]
fn summary_always_matches_the_decision_fold() {
    let rows = vec![
        row("Budi", "Training CMA", "31 Desember 2024"),
        row("Ani", "Training CMA", "bukan tanggal"),
        row("Caca", "Unknown", "31 Desember 2024"),
    ];
    let run = reconciler().reconcile(&rows, &snapshots());
    assert_eq!(run.summary, RunSummary::from_decisions(&run.decisions));
}

#[test]
fn missing_issue_date_is_not_an_error() {
    let mut enrollment = row("Budi", "Training CMA", "31 Desember 2024");
    enrollment.certificate_date = String::new();

    let run = reconciler().reconcile(&[enrollment], &snapshots());
    assert!(matches!(
        run.decisions[0].status,
        ParticipantStatus::Insert(_)
    ));
    assert_eq!(run.decisions[0].issue_date, None);
}

#[test]
fn rerun_with_updated_snapshot_flips_insert_to_skip() {
    let rows = vec![row("Budi Santoso", "Training CMA", "31 Desember 2024")];
    let mut snapshots = snapshots();

    let first = reconciler().reconcile(&rows, &snapshots);
    assert!(matches!(
        first.decisions[0].status,
        ParticipantStatus::Insert(_)
    ));

    // The master data now contains the row inserted by the first run.
    snapshots
        .participant_keys
        .insert(ParticipantKey::new(ScheduleId::new(9), "Budi Santoso"));

    let second = reconciler().reconcile(&rows, &snapshots);
    assert!(matches!(
        second.decisions[0].status,
        ParticipantStatus::AlreadyEnrolled
    ));
    assert_eq!(second.summary.inserted, 0);
    assert_eq!(second.summary.skipped, 1);
}

#[test]
fn certificate_reference_falls_back_to_the_non_empty_fragment() {
    let mut only_note = row("Budi", "Training CMA", "31 Desember 2024");
    only_note.certificate_no = String::new();
    let mut only_no = row("Ani", "Training CMA", "31 Desember 2024");
    only_no.certificate_note = String::new();

    let run = reconciler().reconcile(&[only_note, only_no], &snapshots());
    assert_eq!(run.decisions[0].certificate_ref, "/CERT/XII/2024");
    assert_eq!(run.decisions[1].certificate_ref, "123");
}
