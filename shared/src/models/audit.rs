//! Audit Log Model
//!
//! Entries are immutable once created and never deleted - the log is
//! evidentiary. Read access is superadmin-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audited administrative action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    SettingsChange,
}

/// Entity kind an audit entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityType {
    Organization,
    Menu,
    User,
}

/// Append-only audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Payload for appending an audit entry (id and timestamp are assigned
/// by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogCreate {
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    pub performed_by: String,
    pub details: serde_json::Value,
}
