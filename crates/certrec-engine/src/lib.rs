//! The reconciliation core: pure decisions over immutable snapshots.
//!
//! Three pipelines share a locale-aware date normalizer: program
//! reconciliation (rule-based category inference for new names), schedule
//! reconciliation (composite-key matching of program+date) and participant
//! reconciliation (normalized duplicate detection with paired certificate
//! units). Nothing in this crate performs I/O or raises errors for
//! business-level mismatches; outcomes are decision variants.

pub mod classify;
pub mod date;
pub mod participant;
pub mod program;
pub mod schedule;
pub mod slug;

pub use classify::CategoryClassifier;
pub use date::DateNormalizer;
pub use participant::{ParticipantReconciler, ParticipantRun};
pub use program::ProgramReconciler;
pub use schedule::ScheduleReconciler;
pub use slug::slugify;
