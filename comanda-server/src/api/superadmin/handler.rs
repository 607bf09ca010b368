//! Superadmin Handlers
//!
//! Organization lifecycle (create / update / soft-delete) and the audit
//! trail. Every route requires the superadmin credential; every mutation
//! appends an audit entry naming who performed it.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::models::{
    AuditAction, AuditEntityType, AuditLogCreate, AuditLogEntry, Organization, OrganizationCreate,
    OrganizationStats, OrganizationUpdate,
};

use crate::api::MessageEnvelope;
use crate::auth::Superadmin;
use crate::core::ServerState;
use crate::store::StoreError;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Organization-list envelope with platform stats
#[derive(Debug, Serialize)]
pub struct OrganizationsEnvelope {
    pub success: bool,
    pub organizations: Vec<Organization>,
    pub stats: OrganizationStats,
}

/// Single-organization envelope
#[derive(Debug, Serialize)]
pub struct OrganizationEnvelope {
    pub success: bool,
    pub organization: Organization,
}

/// Platform aggregates: organization counts plus order/revenue totals
/// wired from the order store
fn platform_stats(state: &ServerState) -> OrganizationStats {
    let (total_organizations, active_organizations) = state.organizations.counts();
    let (total_orders, total_revenue) = state.orders.platform_totals();
    OrganizationStats {
        total_organizations,
        active_organizations,
        total_orders,
        total_revenue,
    }
}

/// GET /api/superadmin/organizations
pub async fn list_organizations(
    Superadmin(_): Superadmin,
    State(state): State<ServerState>,
) -> AppResult<Json<OrganizationsEnvelope>> {
    Ok(Json(OrganizationsEnvelope {
        success: true,
        organizations: state.organizations.find_all(),
        stats: platform_stats(&state),
    }))
}

/// GET /api/superadmin/organizations/{id}
pub async fn get_organization(
    Superadmin(_): Superadmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrganizationEnvelope>> {
    let organization = state
        .organizations
        .find_by_id(&id)
        .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "Organization not found"))?;

    Ok(Json(OrganizationEnvelope {
        success: true,
        organization,
    }))
}

/// POST /api/superadmin/organizations
pub async fn create_organization(
    Superadmin(performed_by): Superadmin,
    State(state): State<ServerState>,
    Json(payload): Json<OrganizationCreate>,
) -> AppResult<Json<OrganizationEnvelope>> {
    validate_required_text(&payload.id, "id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let organization = state.organizations.create(payload).map_err(|e| match e {
        // Duplicate tenant keys are a client mistake on this surface (400)
        StoreError::Duplicate(_) => AppError::invalid("Organization ID already exists"),
        other => other.into(),
    })?;

    state.audit.append(AuditLogCreate {
        action: AuditAction::Create,
        entity_type: AuditEntityType::Organization,
        entity_id: organization.id.clone(),
        performed_by: performed_by.clone(),
        details: json!({ "name": organization.name }),
    });

    tracing::info!(
        organization_id = %organization.id,
        performed_by = %performed_by,
        "Organization created"
    );

    Ok(Json(OrganizationEnvelope {
        success: true,
        organization,
    }))
}

/// PATCH /api/superadmin/organizations/{id}
pub async fn update_organization(
    Superadmin(performed_by): Superadmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrganizationUpdate>,
) -> AppResult<Json<OrganizationEnvelope>> {
    let details = serde_json::to_value(&payload).unwrap_or_default();

    let organization = state.organizations.update(&id, payload).map_err(|_| {
        AppError::with_message(ErrorCode::NotFound, "Organization not found")
    })?;

    state.audit.append(AuditLogCreate {
        action: AuditAction::Update,
        entity_type: AuditEntityType::Organization,
        entity_id: id,
        performed_by,
        details,
    });

    Ok(Json(OrganizationEnvelope {
        success: true,
        organization,
    }))
}

/// DELETE /api/superadmin/organizations/{id} - soft delete
pub async fn delete_organization(
    Superadmin(performed_by): Superadmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageEnvelope>> {
    if !state.organizations.delete(&id) {
        return Err(AppError::with_message(
            ErrorCode::NotFound,
            "Organization not found",
        ));
    }

    state.audit.append(AuditLogCreate {
        action: AuditAction::Delete,
        entity_type: AuditEntityType::Organization,
        entity_id: id.clone(),
        performed_by: performed_by.clone(),
        details: json!({}),
    });

    tracing::info!(
        organization_id = %id,
        performed_by = %performed_by,
        "Organization soft-deleted"
    );

    Ok(Json(MessageEnvelope::new(
        "Organization deleted successfully",
    )))
}

/// Audit log query params
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditQuery {
    pub action: Option<AuditAction>,
    pub entity_type: Option<AuditEntityType>,
    pub limit: Option<usize>,
}

/// Audit-log envelope
#[derive(Debug, Serialize)]
pub struct AuditLogsEnvelope {
    pub success: bool,
    pub logs: Vec<AuditLogEntry>,
    pub total: usize,
}

/// GET /api/superadmin/audit-logs
pub async fn audit_logs(
    Superadmin(_): Superadmin,
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<AuditLogsEnvelope>> {
    let logs = state.audit.find_all(
        query.action,
        query.entity_type,
        Some(query.limit.unwrap_or(50)),
    );

    let total = logs.len();
    Ok(Json(AuditLogsEnvelope {
        success: true,
        logs,
        total,
    }))
}
