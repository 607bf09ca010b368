//! Tenant-scoped staff APIs
//!
//! Everything under `/api/org/{org_id}/...`. Each handler validates the
//! target organization first (active tenants only); mutations additionally
//! require a staff session of that organization.

pub mod analytics;
pub mod menu;
pub mod orders;
pub mod settings;
pub mod staff;

use axum::Router;
use shared::models::Organization;

use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/org/{org_id}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .merge(orders::routes())
        .merge(menu::routes())
        .merge(staff::routes())
        .merge(settings::routes())
        .merge(analytics::routes())
}

/// Resolve the target organization or fail with the tenant 404
pub(crate) fn require_org(
    state: &ServerState,
    org_id: &str,
) -> Result<Organization, AppError> {
    state
        .organizations
        .find_by_id(org_id)
        .ok_or_else(|| AppError::new(ErrorCode::TenantNotFound))
}
