//! Authentication DTOs
//!
//! Shared between server and clients. The server-side verification lives
//! behind the `Authenticator` trait in the server crate; these are the wire
//! types only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::StaffRole;

/// Role carried by an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Superadmin,
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    /// Whether this session role may manage an organization's staff directory
    pub fn can_manage_staff(self) -> bool {
        matches!(self, UserRole::Superadmin | UserRole::Admin | UserRole::Manager)
    }
}

impl From<StaffRole> for UserRole {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Admin => UserRole::Admin,
            StaffRole::Manager => UserRole::Manager,
            _ => UserRole::Staff,
        }
    }
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// When set, the account must belong to this organization
    pub organization_id: Option<String>,
}

/// Authenticated session state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// None for superadmin sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the session has passed its expiry
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the session is scoped to the given organization
    pub fn belongs_to(&self, organization_id: &str) -> bool {
        self.organization_id.as_deref() == Some(organization_id)
    }
}

/// Login request body
pub type LoginRequest = Credentials;


/// Login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    /// Opaque session token, presented as `Authorization: Bearer <token>`
    pub token: String,
    pub session: AuthSession,
}
