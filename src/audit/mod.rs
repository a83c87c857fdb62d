//! Audit logging for the budget tracker
//!
//! Every mutation the store commits (budget changes, expenses added, updated
//! or removed, resets) is appended to a line-delimited JSON log together with
//! before/after snapshots. View-state intents such as filtering or starting
//! an edit are not recorded.
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, id.to_string(), Some(name), &expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
