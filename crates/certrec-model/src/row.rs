use serde::{Deserialize, Serialize};

/// One row of the attendance/certificate export, shape-validated at the
/// ingestion boundary. All fields are trimmed; emptiness is data, not a
/// structural error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// Participant name (`Nama` column).
    pub name: String,
    /// Program name as entered (`Program` column).
    pub program: String,
    /// Raw schedule start date (`Tanggal Mulai` column).
    pub start_date: String,
    /// First certificate-reference fragment (`No` column).
    pub certificate_no: String,
    /// Second certificate-reference fragment (`ket` column).
    pub certificate_note: String,
    /// Raw certificate issue date, doubling as the schedule end date
    /// (`Tanggal Sertifikat` column).
    pub certificate_date: String,
}
