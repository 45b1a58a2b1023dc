//! Audit logging system for PocketBudget
//!
//! Records every successful change to income, categories and expenses with
//! before/after values in an append-only audit log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity and
//!   optional before/after values.
//! - `AuditLogger`: writes entries to the log file as JSON lines and reads
//!   them back for the history view.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
