//! Audit Log Store
//!
//! Append-only by design: there is no update or delete operation. The log
//! records superadmin-performed mutations and is read by superadmin tooling
//! only.

use parking_lot::RwLock;
use shared::models::{AuditAction, AuditEntityType, AuditLogCreate, AuditLogEntry};
use shared::util::{now, prefixed_id};

pub struct AuditLogStore {
    entries: RwLock<Vec<AuditLogEntry>>,
}

impl AuditLogStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Append an entry, assigning id and timestamp
    pub fn append(&self, data: AuditLogCreate) -> AuditLogEntry {
        let entry = AuditLogEntry {
            id: prefixed_id("audit"),
            action: data.action,
            entity_type: data.entity_type,
            entity_id: data.entity_id,
            performed_by: data.performed_by,
            performed_at: now(),
            details: data.details,
        };
        self.entries.write().push(entry.clone());
        entry
    }

    /// Entries newest-first, optionally filtered
    pub fn find_all(
        &self,
        action: Option<AuditAction>,
        entity_type: Option<AuditEntityType>,
        limit: Option<usize>,
    ) -> Vec<AuditLogEntry> {
        let mut result: Vec<AuditLogEntry> = self
            .entries
            .read()
            .iter()
            .filter(|e| action.is_none_or(|a| e.action == a))
            .filter(|e| entity_type.is_none_or(|t| e.entity_type == t))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
        if let Some(limit) = limit {
            result.truncate(limit);
        }
        result
    }
}

impl Default for AuditLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(action: AuditAction, entity_id: &str) -> AuditLogCreate {
        AuditLogCreate {
            action,
            entity_type: AuditEntityType::Organization,
            entity_id: entity_id.to_string(),
            performed_by: "superadmin".into(),
            details: json!({}),
        }
    }

    #[test]
    fn test_append_assigns_id_and_timestamp() {
        let store = AuditLogStore::new();
        let logged = store.append(entry(AuditAction::Create, "bella-vista"));
        assert!(logged.id.starts_with("audit-"));
    }

    #[test]
    fn test_filter_by_action() {
        let store = AuditLogStore::new();
        store.append(entry(AuditAction::Create, "a"));
        store.append(entry(AuditAction::Delete, "a"));
        store.append(entry(AuditAction::Create, "b"));

        let creates = store.find_all(Some(AuditAction::Create), None, None);
        assert_eq!(creates.len(), 2);
        assert!(creates.iter().all(|e| e.action == AuditAction::Create));
    }

    #[test]
    fn test_newest_first_and_limit() {
        let store = AuditLogStore::new();
        for i in 0..5 {
            store.append(entry(AuditAction::Update, &format!("org-{}", i)));
        }
        let logs = store.find_all(None, None, Some(3));
        assert_eq!(logs.len(), 3);
        assert!(logs[0].performed_at >= logs[1].performed_at);
        assert!(logs[1].performed_at >= logs[2].performed_at);
    }
}
