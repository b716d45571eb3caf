//! Audit trail for record changes
//!
//! Every create, update and delete of an income or expense is appended to
//! `audit.log` as one JSON line, with the record before and after the change.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: JSONL writer and reader
//! - `diff_records` / `generate_diff`: field-level change summaries

mod diff;
mod entry;
mod logger;

pub use diff::{diff_records, generate_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
