use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use certrec_config::ReconcilerConfig;
use certrec_model::{
    ParticipantDecision, ProgramDecision, ProgramStatus, RunSummary, ScheduleDecision,
};

pub fn print_program_report(decisions: &[ProgramDecision]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Program Name"),
        header_cell("Predicted Category"),
        header_cell("Category ID"),
        header_cell("Status"),
        header_cell("Action"),
        header_cell("Slug"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    // Actionable rows first so new items are easy to review.
    let mut ordered: Vec<&ProgramDecision> = decisions.iter().collect();
    ordered.sort_by_key(|decision| decision.action_label());

    for decision in ordered {
        let (category, category_id) = match &decision.status {
            ProgramStatus::New(prediction) => (
                prediction.category.clone(),
                prediction
                    .category_id
                    .map_or_else(|| "N/A".to_string(), |id| id.to_string()),
            ),
            ProgramStatus::Exists => ("N/A".to_string(), "N/A".to_string()),
        };
        table.add_row(vec![
            Cell::new(&decision.name),
            Cell::new(category),
            Cell::new(category_id),
            status_cell(decision.status_label()),
            action_cell(decision.action_label()),
            Cell::new(&decision.slug),
        ]);
    }
    println!("{table}");
}

pub fn print_schedule_report(decisions: &[ScheduleDecision]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Program Name"),
        header_cell("Start Date"),
        header_cell("End Date"),
        header_cell("Program ID"),
        header_cell("Category ID"),
        header_cell("Status"),
        header_cell("Action"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut ordered: Vec<&ScheduleDecision> = decisions.iter().collect();
    ordered.sort_by_key(|decision| decision.action_label());

    for decision in ordered {
        let (start, end, program_id, category_id) = match decision.resolved() {
            Some(resolved) => (
                resolved.start.to_string(),
                resolved.end.to_string(),
                resolved.program.to_string(),
                resolved.category.to_string(),
            ),
            None => (
                decision.raw_start.clone(),
                decision.raw_end.clone(),
                "N/A".to_string(),
                "N/A".to_string(),
            ),
        };
        table.add_row(vec![
            Cell::new(&decision.program_name),
            Cell::new(start),
            Cell::new(end),
            Cell::new(program_id),
            Cell::new(category_id),
            status_cell(decision.status_label()),
            action_cell(decision.action_label()),
        ]);
    }
    println!("{table}");
}

pub fn print_participant_report(decisions: &[ParticipantDecision], summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Participant Name"),
        header_cell("Program"),
        header_cell("Schedule Start"),
        header_cell("Status"),
        header_cell("Action"),
        header_cell("Cert. Ref."),
        header_cell("Cert. Issue Date"),
    ]);
    apply_table_style(&mut table);

    for decision in decisions {
        let start = decision
            .start_date
            .map_or_else(|| "N/A".to_string(), |date| date.to_string());
        let issued = decision
            .issue_date
            .map_or_else(|| "N/A".to_string(), |date| date.to_string());
        table.add_row(vec![
            Cell::new(&decision.participant_name),
            Cell::new(&decision.program_name),
            Cell::new(start),
            status_cell(decision.status_label()),
            Cell::new(decision.action_label()),
            Cell::new(&decision.certificate_ref),
            Cell::new(issued),
        ]);
    }
    println!("{table}");
    print_run_summary(summary);
}

pub fn print_run_summary(summary: &RunSummary) {
    println!(
        "Summary: Processed: {}, Inserted: {}, Skipped: {}, Not Found: {}",
        summary.processed, summary.inserted, summary.skipped, summary.not_found
    );
}

pub fn print_category_table(config: &ReconcilerConfig) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("ID"),
        header_cell("Keywords"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for (name, id) in &config.categories {
        let keywords = config
            .rules
            .iter()
            .filter(|rule| &rule.category == name)
            .flat_map(|rule| rule.keywords.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ");
        let keywords_cell = if keywords.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(keywords)
        };
        table.add_row(vec![Cell::new(name), Cell::new(id), keywords_cell]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(label: &str) -> Cell {
    match label {
        "New" | "To Be Inserted" => Cell::new(label)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        "Exists" | "Skipped" => dim_cell(label),
        "Invalid Date" | "Not Found" | "Program Not Found" => Cell::new(label).fg(Color::Yellow),
        _ => Cell::new(label),
    }
}

fn action_cell(label: &str) -> Cell {
    if label == "Insert" {
        Cell::new(label)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(label)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
