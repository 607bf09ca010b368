//! Staff Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Staff role within an organization
///
/// `admin`/`manager`/`staff` are the management tiers; the remaining values
/// are operational roles used by the role-based dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Manager,
    Staff,
    Chef,
    Waiter,
    Barman,
    Reception,
}

impl StaffRole {
    /// Whether this role may manage the staff directory
    pub fn can_manage_staff(self) -> bool {
        matches!(self, StaffRole::Admin | StaffRole::Manager)
    }
}

/// Staff member entity - belongs to exactly one organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUser {
    pub id: String,
    pub organization_id: String,
    /// Unique within the organization
    pub email: String,
    pub name: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub email: String,
    pub name: String,
    pub role: StaffRole,
}

/// Update staff payload - narrow, explicitly-typed contract
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<StaffRole>,
}
