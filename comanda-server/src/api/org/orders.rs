//! Tenant-scoped Order Handlers
//!
//! The staff view of the order pipeline: list with filters, create on
//! behalf of a table, progress status, cancel. Status mutations require a
//! staff session of the organization - a session scoped to another tenant
//! cannot touch these orders.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderItemInput, OrderStatus};

use super::require_org;
use crate::api::MessageEnvelope;
use crate::auth::{CurrentSession, MaybeSession, guard::require_org_access};
use crate::core::ServerState;
use crate::store::OrderDraft;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

pub fn routes() -> Router<ServerState> {
    Router::new().route(
        "/orders",
        get(list).post(create).patch(update_status).delete(cancel),
    )
}

/// Single-order envelope
#[derive(Debug, Serialize)]
pub struct OrderEnvelope {
    pub success: bool,
    pub order: Order,
}

/// Order-list envelope with count
#[derive(Debug, Serialize)]
pub struct OrdersEnvelope {
    pub success: bool,
    pub orders: Vec<Order>,
    pub count: usize,
}

/// Query params for the staff order list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub status: Option<OrderStatus>,
    pub limit: Option<usize>,
    pub customer_session_id: Option<String>,
}

/// GET /api/org/{org_id}/orders
///
/// Staff sessions of the organization get the unrestricted view by default;
/// anonymous (customer) callers are bounded by the configured limit.
pub async fn list(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    MaybeSession(session): MaybeSession,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<OrdersEnvelope>> {
    require_org(&state, &org_id)?;

    let is_staff_view = session
        .as_ref()
        .is_some_and(|s| require_org_access(s, &org_id).is_ok());
    let limit = match (query.limit, is_staff_view) {
        (Some(limit), _) => Some(limit),
        (None, true) => None,
        (None, false) => Some(state.config.order_list_limit),
    };

    let orders = state.orders.find_by_organization(
        &org_id,
        query.customer_session_id.as_deref(),
        query.status,
        limit,
    );

    let count = orders.len();
    Ok(Json(OrdersEnvelope {
        success: true,
        orders,
        count,
    }))
}

/// Create order payload (tenant comes from the path)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub customer_name: String,
    /// Walk-in orders without a table default to table 1
    pub table_number: Option<String>,
    pub customer_session_id: Option<String>,
    pub items: Vec<OrderItemInput>,
}

/// POST /api/org/{org_id}/orders
pub async fn create(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    Json(payload): Json<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    require_org(&state, &org_id)?;

    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.table_number, "tableNumber", MAX_SHORT_TEXT_LEN)?;
    for item in &payload.items {
        validate_optional_text(&item.notes, "notes", MAX_NOTE_LEN)?;
    }

    let table_number = payload
        .table_number
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "1".to_string());

    let order = state.orders.create(OrderDraft {
        organization_id: org_id,
        customer_session_id: payload.customer_session_id,
        customer_name: payload.customer_name.trim().to_string(),
        table_number,
        items: payload.items,
    })?;

    tracing::info!(
        order_id = %order.id,
        organization_id = %order.organization_id,
        "Order created via staff API"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderEnvelope {
            success: true,
            order,
        }),
    ))
}

/// Status update payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub order_id: String,
    pub status: OrderStatus,
}

/// PATCH /api/org/{org_id}/orders - tenant-checked status update
pub async fn update_status(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<OrderEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_access(&session, &org_id)?;

    let order = state
        .orders
        .update_status(&payload.order_id, payload.status, Some(&org_id))?;

    tracing::info!(
        order_id = %order.id,
        status = order.status.as_str(),
        performed_by = %session.email,
        "Order status updated"
    );

    Ok(Json(OrderEnvelope {
        success: true,
        order,
    }))
}

/// Cancel query params
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelQuery {
    pub order_id: Option<String>,
}

/// DELETE /api/org/{org_id}/orders?orderId= - cancel an order
pub async fn cancel(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<CancelQuery>,
) -> AppResult<Json<MessageEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_access(&session, &org_id)?;

    let order_id = query.order_id.ok_or_else(|| AppError::required("orderId"))?;
    let order = state.orders.cancel(&order_id, &org_id)?;

    tracing::info!(
        order_id = %order.id,
        performed_by = %session.email,
        "Order cancelled"
    );

    Ok(Json(MessageEnvelope::new("Order cancelled")))
}
