//! Tenant-scoped Menu Handlers
//!
//! Reads are public (customers browse the menu); mutations require a staff
//! session of the organization. Category/item updates go through the narrow
//! typed payloads from `shared::models` - there is no generic merge object,
//! so ids and tenant keys cannot be injected.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use shared::models::{
    CategoryCreate, CategoryUpdate, Menu, MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate,
};

use super::require_org;
use crate::api::MessageEnvelope;
use crate::auth::{CurrentSession, guard::require_org_access};
use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

pub fn routes() -> Router<ServerState> {
    Router::new().route(
        "/menu",
        get(get_menu).post(add).patch(update).delete(delete),
    )
}

/// Menu envelope
#[derive(Debug, Serialize)]
pub struct MenuEnvelope {
    pub success: bool,
    pub menu: Menu,
}

/// Category envelope
#[derive(Debug, Serialize)]
pub struct CategoryEnvelope {
    pub success: bool,
    pub category: MenuCategory,
}

/// Item envelope
#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    pub success: bool,
    pub item: MenuItem,
}

/// GET /api/org/{org_id}/menu
pub async fn get_menu(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
) -> AppResult<Json<MenuEnvelope>> {
    require_org(&state, &org_id)?;

    let menu = state
        .menus
        .find_by_organization(&org_id)
        .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound))?;

    Ok(Json(MenuEnvelope {
        success: true,
        menu,
    }))
}

/// Add request: `{"action": "addCategory" | "addItem", "data": {...}}`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum AddRequest {
    AddCategory(CategoryCreate),
    #[serde(rename_all = "camelCase")]
    AddItem {
        category_id: String,
        item: MenuItemCreate,
    },
}

/// Mutation response - either a category or an item
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MutationResponse {
    Category(CategoryEnvelope),
    Item(ItemEnvelope),
}

/// POST /api/org/{org_id}/menu - add a category or item
pub async fn add(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<AddRequest>,
) -> AppResult<Json<MutationResponse>> {
    require_org(&state, &org_id)?;
    require_org_access(&session, &org_id)?;

    match payload {
        AddRequest::AddCategory(data) => {
            validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
            let category = state.menus.add_category(&org_id, data)?;
            Ok(Json(MutationResponse::Category(CategoryEnvelope {
                success: true,
                category,
            })))
        }
        AddRequest::AddItem { category_id, item } => {
            validate_required_text(&item.name, "name", MAX_NAME_LEN)?;
            let item = state.menus.add_item(&org_id, &category_id, item)?;
            Ok(Json(MutationResponse::Item(ItemEnvelope {
                success: true,
                item,
            })))
        }
    }
}

/// Update request: `{"action": "updateCategory" | "updateItem", "data": {...}}`
#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum UpdateRequest {
    #[serde(rename_all = "camelCase")]
    UpdateCategory { id: String, updates: CategoryUpdate },
    #[serde(rename_all = "camelCase")]
    UpdateItem {
        category_id: String,
        item_id: String,
        updates: MenuItemUpdate,
    },
}

/// PATCH /api/org/{org_id}/menu - update a category or item
pub async fn update(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<UpdateRequest>,
) -> AppResult<Json<MutationResponse>> {
    require_org(&state, &org_id)?;
    require_org_access(&session, &org_id)?;

    match payload {
        UpdateRequest::UpdateCategory { id, updates } => {
            let category = state.menus.update_category(&org_id, &id, updates)?;
            Ok(Json(MutationResponse::Category(CategoryEnvelope {
                success: true,
                category,
            })))
        }
        UpdateRequest::UpdateItem {
            category_id,
            item_id,
            updates,
        } => {
            let item = state.menus.update_item(&org_id, &category_id, &item_id, updates)?;
            Ok(Json(MutationResponse::Item(ItemEnvelope {
                success: true,
                item,
            })))
        }
    }
}

/// Delete query params
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuery {
    pub action: String,
    pub category_id: Option<String>,
    pub item_id: Option<String>,
}

/// DELETE /api/org/{org_id}/menu?action=deleteCategory|deleteItem
pub async fn delete(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<MessageEnvelope>> {
    require_org(&state, &org_id)?;
    require_org_access(&session, &org_id)?;

    match query.action.as_str() {
        "deleteCategory" => {
            let category_id = query
                .category_id
                .ok_or_else(|| AppError::required("categoryId"))?;
            state.menus.delete_category(&org_id, &category_id)?;
            Ok(Json(MessageEnvelope::new("Category deleted")))
        }
        "deleteItem" => {
            let category_id = query
                .category_id
                .ok_or_else(|| AppError::required("categoryId"))?;
            let item_id = query.item_id.ok_or_else(|| AppError::required("itemId"))?;
            state.menus.delete_item(&org_id, &category_id, &item_id)?;
            Ok(Json(MessageEnvelope::new("Item deleted")))
        }
        other => Err(AppError::invalid(format!("Invalid action: {}", other))),
    }
}
