use certrec_model::{
    CanonicalDate, CategoryId, CategoryPrediction, ParticipantDecision, ParticipantInsert,
    ParticipantStatus, ProgramDecision, ProgramId, ProgramStatus, ResolvedSchedule, RunSummary,
    ScheduleDecision, ScheduleId, ScheduleStatus,
};
use certrec_script::{ScriptMeta, participant_script, program_script, schedule_script};

fn meta() -> ScriptMeta {
    let generated_at = chrono::NaiveDate::from_ymd_opt(2025, 1, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    ScriptMeta::new(generated_at, "out/test.sql")
}

fn date(value: &str) -> CanonicalDate {
    CanonicalDate::parse_canonical(value).expect("canonical date")
}

/// First and last non-comment, non-blank lines of a script.
fn frame(script: &str) -> (String, String) {
    let statements: Vec<&str> = script
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with("--"))
        .collect();
    (
        statements.first().map(|s| (*s).to_string()).unwrap_or_default(),
        statements.last().map(|s| (*s).to_string()).unwrap_or_default(),
    )
}

#[test]
fn every_script_is_transaction_framed_even_when_empty() {
    let scripts = [
        program_script(&[], &meta()),
        schedule_script(&[], &meta()),
        participant_script(&[], &meta()),
    ];
    for script in scripts {
        let (open, close) = frame(&script);
        assert_eq!(open, "START TRANSACTION;");
        assert_eq!(close, "COMMIT;");
        assert!(!script.contains("INSERT INTO"));
    }
}

#[test]
fn program_unit_chains_parent_then_child() {
    let decisions = vec![ProgramDecision {
        name: "Workshop Indonesian Tax Outlook 2025".to_string(),
        slug: "workshop-indonesian-tax-outlook-2025".to_string(),
        status: ProgramStatus::New(CategoryPrediction {
            category: "Accounting".to_string(),
            category_id: Some(CategoryId::new(2)),
        }),
    }];

    let script = program_script(&decisions, &meta());
    let parent = script
        .find("INSERT INTO programs (id_category, created_at, updated_at) VALUES (2, NOW(), NOW());")
        .expect("parent insert present");
    let id_capture = script
        .find("SET @last_prog_id = LAST_INSERT_ID();")
        .expect("id capture present");
    let child = script
        .find("INSERT INTO program_translations")
        .expect("child insert present");
    assert!(parent < id_capture && id_capture < child);
    assert!(script.contains("VALUES (@last_prog_id, 'id', 'Workshop Indonesian Tax Outlook 2025', 'workshop-indonesian-tax-outlook-2025', '-', NOW(), NOW());"));
}

#[test]
fn uncategorized_and_existing_programs_are_excluded() {
    let decisions = vec![
        ProgramDecision {
            name: "Training CMA".to_string(),
            slug: "training-cma".to_string(),
            status: ProgramStatus::Exists,
        },
        ProgramDecision {
            name: "Makeup Class: Ready, Set, Glow".to_string(),
            slug: "makeup-class-ready-set-glow".to_string(),
            status: ProgramStatus::New(CategoryPrediction::uncategorized()),
        },
    ];

    let script = program_script(&decisions, &meta());
    assert!(!script.contains("INSERT INTO"));
}

#[test]
fn schedule_units_carry_resolved_ids_and_dates() {
    let decisions = vec![
        ScheduleDecision {
            program_name: "Training CMA".to_string(),
            raw_start: "1 Januari 2025".to_string(),
            raw_end: "3 Januari 2025".to_string(),
            status: ScheduleStatus::New(ResolvedSchedule {
                program: ProgramId::new(5),
                category: CategoryId::new(2),
                start: date("2025-01-01"),
                end: date("2025-01-03"),
            }),
        },
        ScheduleDecision {
            program_name: "Training CMA".to_string(),
            raw_start: "31 Desember 2024".to_string(),
            raw_end: "2 Januari 2025".to_string(),
            status: ScheduleStatus::Exists(ResolvedSchedule {
                program: ProgramId::new(5),
                category: CategoryId::new(2),
                start: date("2024-12-31"),
                end: date("2025-01-02"),
            }),
        },
    ];

    let script = schedule_script(&decisions, &meta());
    assert!(script.contains(
        "INSERT INTO schedules (id_program, id_category, date_start, date_end, \
         time_start, time_end, created_at, updated_at) \
         VALUES (5, 2, '2025-01-01', '2025-01-03', NULL, NULL, NOW(), NOW());"
    ));
    // The existing occurrence is reporting-only.
    assert!(!script.contains("2024-12-31"));
}

#[test]
fn participant_unit_escapes_text_and_nulls_missing_issue_date() {
    let decisions = vec![ParticipantDecision {
        participant_name: "Siti O'Connor".to_string(),
        program_name: "Public Speaking Hacks".to_string(),
        start_date: Some(date("2025-01-18")),
        certificate_ref: "12/CERT'X".to_string(),
        issue_date: None,
        status: ParticipantStatus::Insert(ParticipantInsert {
            schedule: ScheduleId::new(9),
            program: ProgramId::new(8),
            category: CategoryId::new(6),
        }),
    }];

    let script = participant_script(&decisions, &meta());
    assert!(script.contains(
        "INSERT INTO participants (id_schedule, id_program, id_category, name, created_at) \
         VALUES (9, 8, 6, 'Siti O''Connor', NOW());"
    ));
    let id_capture = script
        .find("SET @last_part_id = LAST_INSERT_ID();")
        .expect("id capture present");
    let child = script
        .find("INSERT INTO certificates")
        .expect("certificate insert present");
    assert!(id_capture < child);
    assert!(script.contains("VALUES (@last_part_id, '12/CERT''X', 'Public Speaking Hacks', NULL, NOW());"));
}

#[test]
fn only_insert_decisions_become_participant_units() {
    let skipped = ParticipantDecision {
        participant_name: "Budi".to_string(),
        program_name: "Training CMA".to_string(),
        start_date: None,
        certificate_ref: String::new(),
        issue_date: None,
        status: ParticipantStatus::InvalidStartDate,
    };
    let not_found = ParticipantDecision {
        status: ParticipantStatus::ScheduleNotFound,
        ..skipped.clone()
    };

    let decisions = vec![skipped, not_found];
    let script = participant_script(&decisions, &meta());
    assert!(!script.contains("INSERT INTO"));
    // Counters still see every row.
    assert_eq!(RunSummary::from_decisions(&decisions).processed, 2);
}
