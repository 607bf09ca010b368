//! Tenant-scoped Settings Handlers
//!
//! Settings/theme/contact are replaced wholesale when present in the patch
//! (matching the organization store's merge semantics). Every change is
//! appended to the audit log as `settings_change`.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::models::{
    AuditAction, AuditEntityType, AuditLogCreate, OrganizationContact, OrganizationSettings,
    OrganizationTheme, OrganizationUpdate,
};

use super::require_org;
use crate::auth::{CurrentSession, guard::require_org_manager};
use crate::core::ServerState;
use crate::utils::AppResult;

pub fn routes() -> Router<ServerState> {
    Router::new().route("/settings", get(get_settings).patch(update_settings))
}

/// Settings envelope - settings plus branding and contact
#[derive(Debug, Serialize)]
pub struct SettingsEnvelope {
    pub success: bool,
    pub settings: OrganizationSettings,
    pub theme: OrganizationTheme,
    pub contact: OrganizationContact,
}

/// GET /api/org/{org_id}/settings
pub async fn get_settings(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
) -> AppResult<Json<SettingsEnvelope>> {
    let org = require_org(&state, &org_id)?;

    Ok(Json(SettingsEnvelope {
        success: true,
        settings: org.settings,
        theme: org.theme,
        contact: org.contact,
    }))
}

/// Settings patch payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub settings: Option<OrganizationSettings>,
    pub theme: Option<OrganizationTheme>,
    pub contact: Option<OrganizationContact>,
}

/// PATCH /api/org/{org_id}/settings
pub async fn update_settings(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<SettingsPatch>,
) -> AppResult<Json<SettingsEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_manager(&session, &org_id)?;

    let details = serde_json::to_value(&payload).unwrap_or_default();

    let org = state.organizations.update(
        &org_id,
        OrganizationUpdate {
            settings: payload.settings,
            theme: payload.theme,
            contact: payload.contact,
            ..Default::default()
        },
    )?;

    state.audit.append(AuditLogCreate {
        action: AuditAction::SettingsChange,
        entity_type: AuditEntityType::Organization,
        entity_id: org_id.clone(),
        performed_by: session.email.clone(),
        details,
    });

    tracing::info!(
        organization_id = %org_id,
        performed_by = %session.email,
        "Organization settings updated"
    );

    Ok(Json(SettingsEnvelope {
        success: true,
        settings: org.settings,
        theme: org.theme,
        contact: org.contact,
    }))
}
