//! Renders decision lists into atomic batch mutation scripts.
//!
//! The artifact is plain MySQL text: a provenance comment header, a
//! transaction-open statement, ordered mutation units with parent/child
//! identifier chaining, and a transaction-close statement. The whole batch
//! either fully applies or fully does not; the builder itself never
//! retries or checkpoints.

pub mod builders;
pub mod writer;

pub use builders::{
    insertable_participants, insertable_programs, insertable_schedules, participant_script,
    program_script, schedule_script,
};
pub use writer::{ScriptMeta, ScriptWriter, quoted, quoted_date_or_null};
