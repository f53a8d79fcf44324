pub mod date;
pub mod decision;
pub mod error;
pub mod ids;
pub mod keys;
pub mod row;
pub mod snapshot;

pub use date::CanonicalDate;
pub use decision::{
    CategoryPrediction, ParticipantDecision, ParticipantInsert, ParticipantStatus,
    ProgramDecision, ProgramStatus, ResolvedSchedule, RunSummary, ScheduleDecision,
    ScheduleStatus, UNCATEGORIZED,
};
pub use error::{ModelError, Result};
pub use ids::{CategoryId, ProgramId, ScheduleId};
pub use keys::{ParticipantKey, ScheduleKey};
pub use row::AttendanceRow;
pub use snapshot::{MasterSnapshots, ProgramRef};
