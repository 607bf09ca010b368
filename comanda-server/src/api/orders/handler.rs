//! Customer-facing Order Handlers
//!
//! Tenant precedence: resolved tenant (header/subdomain) first, explicit
//! `organizationId` body/query field as fallback. The customer session id
//! comes from the payload/query or the `x-customer-session` header.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::{Deserialize, Serialize};
use shared::models::{Order, OrderCreate, OrderStatus, OrderUpdateStatus};

use crate::core::ServerState;
use crate::store::OrderDraft;
use crate::tenant::TenantId;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Header carrying the anonymous customer session id
pub const CUSTOMER_SESSION_HEADER: &str = "x-customer-session";

fn header_customer_session(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CUSTOMER_SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(String::from)
}

/// Single-order envelope
#[derive(Debug, Serialize)]
pub struct OrderEnvelope {
    pub success: bool,
    pub order: Order,
}

/// Order-list envelope
#[derive(Debug, Serialize)]
pub struct OrdersEnvelope {
    pub success: bool,
    pub orders: Vec<Order>,
}

/// Query params for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub organization_id: Option<String>,
    pub customer_session_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub limit: Option<usize>,
}

/// GET /api/orders - list orders for the resolved tenant
///
/// The customer-session filter scopes the anonymous "my orders" view; the
/// result is newest-first and bounded by the configured default limit.
pub async fn list(
    State(state): State<ServerState>,
    Extension(TenantId(tenant)): Extension<TenantId>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<OrdersEnvelope>> {
    let organization_id = tenant
        .or(query.organization_id)
        .ok_or_else(|| AppError::new(ErrorCode::TenantNotSelected))?;

    let customer_session = query
        .customer_session_id
        .or_else(|| header_customer_session(&headers));

    let orders = state.orders.find_by_organization(
        &organization_id,
        customer_session.as_deref(),
        query.status,
        Some(query.limit.unwrap_or(state.config.order_list_limit)),
    );

    Ok(Json(OrdersEnvelope {
        success: true,
        orders,
    }))
}

/// POST /api/orders - place an order
///
/// Items are validated against the tenant's active menu and the total is
/// computed server-side; any client-supplied `totalAmount` is ignored.
pub async fn create(
    State(state): State<ServerState>,
    Extension(TenantId(tenant)): Extension<TenantId>,
    headers: HeaderMap,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderEnvelope>> {
    let organization_id = tenant
        .or(payload.organization_id)
        .ok_or_else(|| AppError::new(ErrorCode::TenantNotSelected))?;

    validate_required_text(&payload.customer_name, "customerName", MAX_NAME_LEN)?;
    validate_required_text(&payload.table_number, "tableNumber", MAX_SHORT_TEXT_LEN)?;
    for item in &payload.items {
        validate_optional_text(&item.notes, "notes", MAX_NOTE_LEN)?;
    }

    let customer_session = payload
        .customer_session_id
        .or_else(|| header_customer_session(&headers));

    let order = state.orders.create(OrderDraft {
        organization_id,
        customer_session_id: customer_session,
        customer_name: payload.customer_name.trim().to_string(),
        table_number: payload.table_number.trim().to_string(),
        items: payload.items,
    })?;

    tracing::info!(
        order_id = %order.id,
        organization_id = %order.organization_id,
        total_amount = order.total_amount,
        "Order placed"
    );

    Ok(Json(OrderEnvelope {
        success: true,
        order,
    }))
}

/// Query params for fetching a single order
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuery {
    pub organization_id: Option<String>,
}

/// GET /api/orders/{id} - customer order tracking
///
/// When a tenant is resolvable the lookup is tenant-checked, so an order id
/// from another restaurant reads as not-found.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(TenantId(tenant)): Extension<TenantId>,
    Path(id): Path<String>,
    Query(query): Query<GetQuery>,
) -> AppResult<Json<OrderEnvelope>> {
    let order = match tenant.or(query.organization_id) {
        Some(organization_id) => state.orders.find_by_id_in_org(&id, &organization_id),
        None => state.orders.find_by_id(&id),
    }
    .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    Ok(Json(OrderEnvelope {
        success: true,
        order,
    }))
}

/// PATCH /api/orders/{id} - progress an order through the pipeline
///
/// The transition is validated against the lifecycle graph; terminal orders
/// reject every further mutation.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdateStatus>,
) -> AppResult<Json<OrderEnvelope>> {
    let order = state.orders.update_status(&id, payload.status, None)?;

    tracing::info!(
        order_id = %order.id,
        status = order.status.as_str(),
        "Order status updated"
    );

    Ok(Json(OrderEnvelope {
        success: true,
        order,
    }))
}
