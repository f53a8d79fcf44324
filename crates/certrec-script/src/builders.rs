//! Mutation-unit rendering for the three pipelines.
//!
//! Only actionable decisions become units; everything else is
//! reporting-only and never silently upgraded into a mutation. Unit order
//! follows decision order, and within a unit the parent insert always
//! precedes the child that references its generated identifier.

use certrec_model::{
    ParticipantDecision, ParticipantStatus, ProgramDecision, ProgramStatus, ResolvedSchedule,
    ScheduleDecision, ScheduleStatus,
};

use crate::writer::{ScriptMeta, ScriptWriter, quoted, quoted_date_or_null};

/// Program decisions that may be rendered: `New` with a resolved category.
/// An uncategorized prediction is a valid decision, but it cannot be
/// inserted without manual intervention, so it is filtered here.
pub fn insertable_programs(decisions: &[ProgramDecision]) -> Vec<&ProgramDecision> {
    decisions
        .iter()
        .filter(|decision| match &decision.status {
            ProgramStatus::New(prediction) => prediction.category_id.is_some(),
            ProgramStatus::Exists => false,
        })
        .collect()
}

/// Schedule decisions that may be rendered.
pub fn insertable_schedules(decisions: &[ScheduleDecision]) -> Vec<&ScheduleDecision> {
    decisions
        .iter()
        .filter(|decision| matches!(decision.status, ScheduleStatus::New(_)))
        .collect()
}

/// Participant decisions that may be rendered.
pub fn insertable_participants(decisions: &[ParticipantDecision]) -> Vec<&ParticipantDecision> {
    decisions
        .iter()
        .filter(|decision| matches!(decision.status, ParticipantStatus::Insert(_)))
        .collect()
}

/// Renders the program batch: parent `programs` row, then the
/// `program_translations` child chained through `LAST_INSERT_ID()`.
pub fn program_script(decisions: &[ProgramDecision], meta: &ScriptMeta) -> String {
    let mut writer = ScriptWriter::begin(meta);
    for decision in insertable_programs(decisions) {
        let ProgramStatus::New(prediction) = &decision.status else {
            continue;
        };
        let Some(category_id) = prediction.category_id else {
            continue;
        };
        writer.comment(&format!(
            "New Program: {} ({})",
            decision.name, prediction.category
        ));
        writer.statement(&format!(
            "INSERT INTO programs (id_category, created_at, updated_at) \
             VALUES ({category_id}, NOW(), NOW());"
        ));
        writer.statement("SET @last_prog_id = LAST_INSERT_ID();");
        writer.statement(&format!(
            "INSERT INTO program_translations (id_program, language_code, name, slug, \
             description, created_at, updated_at) \
             VALUES (@last_prog_id, 'id', {}, {}, '-', NOW(), NOW());",
            quoted(&decision.name),
            quoted(&decision.slug),
        ));
        writer.blank();
    }
    writer.commit()
}

/// Renders the schedule batch: one independent insert per new occurrence.
pub fn schedule_script(decisions: &[ScheduleDecision], meta: &ScriptMeta) -> String {
    let mut writer = ScriptWriter::begin(meta);
    for decision in insertable_schedules(decisions) {
        let ScheduleStatus::New(resolved) = &decision.status else {
            continue;
        };
        write_schedule_unit(&mut writer, &decision.program_name, resolved);
    }
    writer.commit()
}

fn write_schedule_unit(writer: &mut ScriptWriter, program_name: &str, resolved: &ResolvedSchedule) {
    writer.comment(&format!(
        "New Schedule: {program_name} ({} to {})",
        resolved.start, resolved.end
    ));
    writer.statement(&format!(
        "INSERT INTO schedules (id_program, id_category, date_start, date_end, \
         time_start, time_end, created_at, updated_at) \
         VALUES ({}, {}, '{}', '{}', NULL, NULL, NOW(), NOW());",
        resolved.program, resolved.category, resolved.start, resolved.end,
    ));
    writer.blank();
}

/// Renders the participant batch: `participants` parent, then the
/// one-to-one `certificates` child chained through `LAST_INSERT_ID()`.
pub fn participant_script(decisions: &[ParticipantDecision], meta: &ScriptMeta) -> String {
    let mut writer = ScriptWriter::begin(meta);
    for decision in insertable_participants(decisions) {
        let ParticipantStatus::Insert(insert) = &decision.status else {
            continue;
        };
        writer.comment(&format!(
            "New Participant: {} ({})",
            decision.participant_name, decision.program_name
        ));
        writer.statement(&format!(
            "INSERT INTO participants (id_schedule, id_program, id_category, name, created_at) \
             VALUES ({}, {}, {}, {}, NOW());",
            insert.schedule,
            insert.program,
            insert.category,
            quoted(&decision.participant_name),
        ));
        writer.statement("SET @last_part_id = LAST_INSERT_ID();");
        writer.statement(&format!(
            "INSERT INTO certificates (id_participant, reference_number, nama_program, \
             issued_at, created_at) \
             VALUES (@last_part_id, {}, {}, {}, NOW());",
            quoted(&decision.certificate_ref),
            quoted(&decision.program_name),
            quoted_date_or_null(decision.issue_date),
        ));
        writer.blank();
    }
    writer.commit()
}
