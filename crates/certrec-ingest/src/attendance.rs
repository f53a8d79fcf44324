//! Attendance/certificate export ingestion.
//!
//! The export is a human-maintained spreadsheet dump; headers and cells come
//! back trimmed and BOM-stripped. Shape (required columns) is validated here,
//! once, so the reconcilers never handle missing fields. Emptiness inside a
//! row is data and is passed through.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use certrec_model::AttendanceRow;

use crate::error::{IngestError, Result};

/// Participant name column.
pub const COL_NAME: &str = "Nama";
/// Program name column.
pub const COL_PROGRAM: &str = "Program";
/// Schedule start-date column.
pub const COL_START: &str = "Tanggal Mulai";
/// First certificate-reference fragment; optional in older exports.
pub const COL_CERT_NO: &str = "No";
/// Second certificate-reference fragment.
pub const COL_CERT_NOTE: &str = "ket";
/// Certificate issue date, doubling as the schedule end date.
pub const COL_CERT_DATE: &str = "Tanggal Sertifikat";

const REQUIRED_COLUMNS: [&str; 5] = [COL_NAME, COL_PROGRAM, COL_START, COL_CERT_NOTE, COL_CERT_DATE];

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Loads the attendance export into fixed-shape rows.
///
/// Fails (fatal for the run) when the file is unreadable or any required
/// column is absent.
pub fn read_attendance(path: &Path) -> Result<Vec<AttendanceRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .iter()
        .map(normalize_header)
        .collect();

    let index_of = |name: &str| headers.iter().position(|header| header == name);
    let no_idx = index_of(COL_CERT_NO);

    let (
        Some(name_idx),
        Some(program_idx),
        Some(start_idx),
        Some(note_idx),
        Some(cert_date_idx),
    ) = (
        index_of(COL_NAME),
        index_of(COL_PROGRAM),
        index_of(COL_START),
        index_of(COL_CERT_NOTE),
        index_of(COL_CERT_DATE),
    )
    else {
        let columns = REQUIRED_COLUMNS
            .iter()
            .filter(|name| index_of(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns,
        });
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let cell = |idx: usize| record.get(idx).map(normalize_cell).unwrap_or_default();
        rows.push(AttendanceRow {
            name: cell(name_idx),
            program: cell(program_idx),
            start_date: cell(start_idx),
            certificate_no: no_idx.map(&cell).unwrap_or_default(),
            certificate_note: cell(note_idx),
            certificate_date: cell(cert_date_idx),
        });
    }

    debug!(rows = rows.len(), path = %path.display(), "attendance export loaded");
    Ok(rows)
}
