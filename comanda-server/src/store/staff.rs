//! Staff Store
//!
//! Per-tenant staff directory. Email is unique within an organization; the
//! same address may exist under a different tenant. Role enforcement happens
//! at the API boundary, not here.

use parking_lot::RwLock;
use shared::models::{StaffCreate, StaffUpdate, StaffUser};
use shared::util::{now, prefixed_id};

use super::{StoreError, StoreResult};

pub struct StaffStore {
    staff: RwLock<Vec<StaffUser>>,
}

impl StaffStore {
    pub fn new(seed: Vec<StaffUser>) -> Self {
        Self {
            staff: RwLock::new(seed),
        }
    }

    /// All staff of an organization
    pub fn find_by_organization(&self, organization_id: &str) -> Vec<StaffUser> {
        self.staff
            .read()
            .iter()
            .filter(|s| s.organization_id == organization_id)
            .cloned()
            .collect()
    }

    /// Create a staff member, rejecting a duplicate email within the tenant
    pub fn create(&self, organization_id: &str, data: StaffCreate) -> StoreResult<StaffUser> {
        let mut staff = self.staff.write();
        if staff
            .iter()
            .any(|s| s.organization_id == organization_id && s.email == data.email)
        {
            return Err(StoreError::Duplicate(format!(
                "Staff member with email '{}' already exists",
                data.email
            )));
        }

        let member = StaffUser {
            id: prefixed_id("staff"),
            organization_id: organization_id.to_string(),
            email: data.email,
            name: data.name,
            role: data.role,
            created_at: now(),
        };
        staff.push(member.clone());
        Ok(member)
    }

    /// Apply a typed partial update, tenant-checked
    pub fn update(
        &self,
        staff_id: &str,
        organization_id: &str,
        data: StaffUpdate,
    ) -> StoreResult<StaffUser> {
        let mut staff = self.staff.write();

        // Email uniqueness must be re-checked before taking the &mut borrow
        if let Some(ref email) = data.email
            && staff.iter().any(|s| {
                s.organization_id == organization_id && s.email == *email && s.id != staff_id
            })
        {
            return Err(StoreError::Duplicate(format!(
                "Staff member with email '{}' already exists",
                email
            )));
        }

        let member = staff
            .iter_mut()
            .find(|s| s.id == staff_id && s.organization_id == organization_id)
            .ok_or_else(|| StoreError::NotFound(format!("Staff member {} not found", staff_id)))?;

        if let Some(email) = data.email {
            member.email = email;
        }
        if let Some(name) = data.name {
            member.name = name;
        }
        if let Some(role) = data.role {
            member.role = role;
        }
        Ok(member.clone())
    }

    /// Remove a staff member, tenant-checked
    pub fn delete(&self, staff_id: &str, organization_id: &str) -> StoreResult<()> {
        let mut staff = self.staff.write();
        let index = staff
            .iter()
            .position(|s| s.id == staff_id && s.organization_id == organization_id)
            .ok_or_else(|| StoreError::NotFound(format!("Staff member {} not found", staff_id)))?;
        staff.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::StaffRole;

    fn create(email: &str, role: StaffRole) -> StaffCreate {
        StaffCreate {
            email: email.to_string(),
            name: "Test".into(),
            role,
        }
    }

    #[test]
    fn test_duplicate_email_same_org_rejected() {
        let store = StaffStore::new(vec![]);
        store
            .create("bella-vista", create("a@x.com", StaffRole::Staff))
            .unwrap();
        assert!(matches!(
            store.create("bella-vista", create("a@x.com", StaffRole::Chef)),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn test_same_email_different_org_allowed() {
        let store = StaffStore::new(vec![]);
        store
            .create("bella-vista", create("a@x.com", StaffRole::Staff))
            .unwrap();
        assert!(
            store
                .create("urban-cafe", create("a@x.com", StaffRole::Staff))
                .is_ok()
        );
    }

    #[test]
    fn test_update_is_tenant_checked() {
        let store = StaffStore::new(vec![]);
        let member = store
            .create("bella-vista", create("a@x.com", StaffRole::Waiter))
            .unwrap();

        assert!(matches!(
            store.update(&member.id, "urban-cafe", StaffUpdate::default()),
            Err(StoreError::NotFound(_))
        ));

        let updated = store
            .update(
                &member.id,
                "bella-vista",
                StaffUpdate {
                    role: Some(StaffRole::Manager),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.role, StaffRole::Manager);
        assert_eq!(updated.email, "a@x.com");
    }

    #[test]
    fn test_update_rejects_email_collision() {
        let store = StaffStore::new(vec![]);
        store
            .create("bella-vista", create("a@x.com", StaffRole::Staff))
            .unwrap();
        let b = store
            .create("bella-vista", create("b@x.com", StaffRole::Staff))
            .unwrap();

        assert!(matches!(
            store.update(
                &b.id,
                "bella-vista",
                StaffUpdate {
                    email: Some("a@x.com".into()),
                    ..Default::default()
                },
            ),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn test_delete_tenant_checked() {
        let store = StaffStore::new(vec![]);
        let member = store
            .create("bella-vista", create("a@x.com", StaffRole::Staff))
            .unwrap();

        assert!(matches!(
            store.delete(&member.id, "urban-cafe"),
            Err(StoreError::NotFound(_))
        ));
        store.delete(&member.id, "bella-vista").unwrap();
        assert!(store.find_by_organization("bella-vista").is_empty());
    }
}
