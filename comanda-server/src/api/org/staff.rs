//! Tenant-scoped Staff Directory Handlers
//!
//! Mutations are restricted to admins/managers of the organization. Email
//! is unique per tenant; the same address may exist at another restaurant.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::models::{StaffCreate, StaffUpdate, StaffUser};

use super::require_org;
use crate::api::MessageEnvelope;
use crate::auth::{CurrentSession, guard::require_org_manager};
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

pub fn routes() -> Router<ServerState> {
    Router::new().route(
        "/staff",
        get(list).post(create).patch(update).delete(delete),
    )
}

/// Staff-list envelope
#[derive(Debug, Serialize)]
pub struct StaffListEnvelope {
    pub success: bool,
    pub staff: Vec<StaffUser>,
    pub count: usize,
}

/// Single staff member envelope
#[derive(Debug, Serialize)]
pub struct StaffEnvelope {
    pub success: bool,
    pub staff: StaffUser,
}

/// GET /api/org/{org_id}/staff
pub async fn list(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
) -> AppResult<Json<StaffListEnvelope>> {
    require_org(&state, &org_id)?;

    let staff = state.staff.find_by_organization(&org_id);
    let count = staff.len();
    Ok(Json(StaffListEnvelope {
        success: true,
        staff,
        count,
    }))
}

/// POST /api/org/{org_id}/staff
pub async fn create(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<StaffCreate>,
) -> AppResult<impl IntoResponse> {
    require_org(&state, &org_id)?;
    require_org_manager(&session, &org_id)?;

    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let staff = state.staff.create(&org_id, payload)?;

    tracing::info!(
        staff_id = %staff.id,
        organization_id = %org_id,
        performed_by = %session.email,
        "Staff member created"
    );

    Ok((
        StatusCode::CREATED,
        Json(StaffEnvelope {
            success: true,
            staff,
        }),
    ))
}

/// Update payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub staff_id: String,
    pub updates: StaffUpdate,
}

/// PATCH /api/org/{org_id}/staff
pub async fn update(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<UpdateRequest>,
) -> AppResult<Json<StaffEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_manager(&session, &org_id)?;

    let staff = state
        .staff
        .update(&payload.staff_id, &org_id, payload.updates)?;

    Ok(Json(StaffEnvelope {
        success: true,
        staff,
    }))
}

/// Delete query params
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuery {
    pub staff_id: Option<String>,
}

/// DELETE /api/org/{org_id}/staff?staffId=
pub async fn delete(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<MessageEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_manager(&session, &org_id)?;

    let staff_id = query.staff_id.ok_or_else(|| AppError::required("staffId"))?;
    state.staff.delete(&staff_id, &org_id)?;

    tracing::info!(
        staff_id = %staff_id,
        organization_id = %org_id,
        performed_by = %session.email,
        "Staff member removed"
    );

    Ok(Json(MessageEnvelope::new("Staff member removed")))
}
