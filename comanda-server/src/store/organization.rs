//! Organization Store
//!
//! The tenant registry. Organizations are soft-deleted only: `delete` flips
//! `is_active` and every read filters inactive records out.

use parking_lot::RwLock;
use shared::models::{Organization, OrganizationCreate, OrganizationUpdate};
use shared::util::now;

use super::{StoreError, StoreResult};

pub struct OrganizationStore {
    orgs: RwLock<Vec<Organization>>,
}

impl OrganizationStore {
    pub fn new(seed: Vec<Organization>) -> Self {
        Self {
            orgs: RwLock::new(seed),
        }
    }

    /// All active organizations
    pub fn find_all(&self) -> Vec<Organization> {
        self.orgs
            .read()
            .iter()
            .filter(|o| o.is_active)
            .cloned()
            .collect()
    }

    /// Single active organization by id
    pub fn find_by_id(&self, id: &str) -> Option<Organization> {
        self.orgs
            .read()
            .iter()
            .find(|o| o.id == id && o.is_active)
            .cloned()
    }

    /// Whether an active organization with this id exists
    pub fn exists_active(&self, id: &str) -> bool {
        self.orgs.read().iter().any(|o| o.id == id && o.is_active)
    }

    /// Create a new organization
    ///
    /// Applies default settings when omitted, activates the record and stamps
    /// both timestamps. Rejects an id already taken by any record, active or
    /// soft-deleted - tenant keys are never reused.
    pub fn create(&self, data: OrganizationCreate) -> StoreResult<Organization> {
        let mut orgs = self.orgs.write();
        if orgs.iter().any(|o| o.id == data.id) {
            return Err(StoreError::Duplicate(format!(
                "Organization ID '{}' already exists",
                data.id
            )));
        }

        let ts = now();
        let org = Organization {
            id: data.id,
            name: data.name,
            theme: data.theme,
            contact: data.contact,
            settings: data.settings.unwrap_or_default(),
            is_active: true,
            created_at: ts,
            updated_at: ts,
        };
        orgs.push(org.clone());
        Ok(org)
    }

    /// Shallow-merge the provided fields and refresh `updated_at`
    ///
    /// Nested `theme`/`contact`/`settings` are replaced wholesale when
    /// present. Matches any record regardless of `is_active`, so a
    /// soft-deleted organization can be reactivated via `is_active: true`.
    pub fn update(&self, id: &str, data: OrganizationUpdate) -> StoreResult<Organization> {
        let mut orgs = self.orgs.write();
        let org = orgs
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Organization {} not found", id)))?;

        if let Some(name) = data.name {
            org.name = name;
        }
        if let Some(theme) = data.theme {
            org.theme = theme;
        }
        if let Some(contact) = data.contact {
            org.contact = contact;
        }
        if let Some(settings) = data.settings {
            org.settings = settings;
        }
        if let Some(is_active) = data.is_active {
            org.is_active = is_active;
        }
        org.updated_at = now();
        Ok(org.clone())
    }

    /// Soft-delete: flip `is_active` to false
    ///
    /// Returns false when the id is unknown or the record is already
    /// inactive, so a second delete reads as not-found.
    pub fn delete(&self, id: &str) -> bool {
        let mut orgs = self.orgs.write();
        match orgs.iter_mut().find(|o| o.id == id && o.is_active) {
            Some(org) => {
                org.is_active = false;
                org.updated_at = now();
                true
            }
            None => false,
        }
    }

    /// (total, active) organization counts
    pub fn counts(&self) -> (usize, usize) {
        let orgs = self.orgs.read();
        let total = orgs.len();
        let active = orgs.iter().filter(|o| o.is_active).count();
        (total, active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrganizationContact, OrganizationTheme};

    fn make_create(id: &str) -> OrganizationCreate {
        OrganizationCreate {
            id: id.to_string(),
            name: format!("Test {}", id),
            theme: OrganizationTheme {
                primary_color: "#111111".into(),
                secondary_color: "#222222".into(),
                accent_color: "#333333".into(),
            },
            contact: OrganizationContact::default(),
            settings: None,
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let store = OrganizationStore::new(vec![]);
        let org = store.create(make_create("t1")).unwrap();
        assert!(org.is_active);
        assert_eq!(org.settings.qr_code_expiry_minutes, 60);
        assert!(org.settings.require_table_number);
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let store = OrganizationStore::new(vec![]);
        store.create(make_create("t1")).unwrap();
        assert!(matches!(
            store.create(make_create("t1")),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn test_create_rejects_soft_deleted_id() {
        let store = OrganizationStore::new(vec![]);
        store.create(make_create("t1")).unwrap();
        assert!(store.delete("t1"));
        // Tenant keys are never reused, even after soft-delete
        assert!(matches!(
            store.create(make_create("t1")),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn test_soft_delete_idempotence() {
        let store = OrganizationStore::new(vec![]);
        store.create(make_create("t1")).unwrap();

        assert!(store.delete("t1"));
        assert!(!store.delete("t1"), "second delete must read as not-found");
        assert!(!store.delete("missing"));

        assert!(store.find_by_id("t1").is_none());
        assert!(store.find_all().is_empty());
    }

    #[test]
    fn test_update_replaces_nested_wholesale() {
        let store = OrganizationStore::new(vec![]);
        let org = store.create(make_create("t1")).unwrap();

        let updated = store
            .update(
                "t1",
                OrganizationUpdate {
                    contact: Some(OrganizationContact {
                        phone: Some("+265 1 234 567".into()),
                        website: None,
                    }),
                    ..Default::default()
                },
            )
            .unwrap();

        // The whole contact object is replaced, not merged field-by-field
        assert_eq!(updated.contact.phone.as_deref(), Some("+265 1 234 567"));
        assert!(updated.contact.website.is_none());
        assert!(updated.updated_at >= org.updated_at);
    }

    #[test]
    fn test_update_unknown_id() {
        let store = OrganizationStore::new(vec![]);
        assert!(matches!(
            store.update("ghost", OrganizationUpdate::default()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_reactivation_via_update() {
        let store = OrganizationStore::new(vec![]);
        store.create(make_create("t1")).unwrap();
        store.delete("t1");

        store
            .update(
                "t1",
                OrganizationUpdate {
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(store.find_by_id("t1").is_some());
    }
}
