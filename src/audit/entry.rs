//! Audit entry data structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;

/// Kind of mutation an entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// The budget ceiling
    Budget,
    Expense,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Budget => "Budget",
            Self::Expense => "Expense",
        })
    }
}

/// One line of the audit log
///
/// `before`/`after` hold JSON snapshots of the entity; a create has no
/// `before` and a delete has no `after`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Label shown next to the id, such as the expense name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
    ) -> Self {
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            Operation::Create,
            entity_type,
            entity_id.into(),
            entity_name,
            None,
            snapshot,
        )
    }

    /// Record an update; the diff summary is derived from the two snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self::record(
            Operation::Update,
            entity_type,
            entity_id.into(),
            entity_name,
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
        )
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            Operation::Delete,
            entity_type,
            entity_id.into(),
            entity_name,
            snapshot,
            None,
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
