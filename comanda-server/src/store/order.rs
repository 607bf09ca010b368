//! Order Store - the order lifecycle state machine
//!
//! Creation validates the tenant, the active menu and every submitted line
//! item before anything is written, so a rejected order leaves the store
//! untouched. Status updates are validated against the transition graph in
//! [`OrderStatus`]; `delivered` and `cancelled` are terminal.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::error::{AppError, ErrorCode};
use shared::models::{Order, OrderItem, OrderItemInput, OrderStatus};
use shared::types::Money;
use shared::util::{now, prefixed_id};
use thiserror::Error;

use super::{MenuStore, OrganizationStore};

/// Order operation errors
///
/// Variants carry enough context for the API boundary to map onto the
/// platform error codes without string matching.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid organization ID")]
    OrganizationNotFound,

    #[error("No active menu for organization")]
    NoActiveMenu,

    #[error("Order items are required")]
    EmptyOrder,

    #[error("Invalid order items: unknown item {0}")]
    UnknownItem(String),

    #[error("Invalid order items: {0} is unavailable")]
    ItemUnavailable(String),

    #[error("Invalid quantity for item {0}")]
    InvalidQuantity(String),

    #[error("Order {0} not found")]
    NotFound(String),

    #[error("Order is already {}", .0.as_str())]
    AlreadyClosed(OrderStatus),

    #[error("Illegal status transition: {} -> {}", .0.as_str(), .1.as_str())]
    InvalidTransition(OrderStatus, OrderStatus),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        // Creation-time failures are validation errors (400), distinct from
        // the not-found of unknown order ids
        let code = match &err {
            OrderError::OrganizationNotFound => ErrorCode::InvalidRequest,
            OrderError::NoActiveMenu => ErrorCode::NoActiveMenu,
            OrderError::EmptyOrder => ErrorCode::EmptyOrder,
            OrderError::UnknownItem(_) | OrderError::ItemUnavailable(_) => {
                ErrorCode::ItemUnavailable
            }
            OrderError::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            OrderError::NotFound(_) => ErrorCode::OrderNotFound,
            OrderError::AlreadyClosed(_) => ErrorCode::OrderAlreadyClosed,
            OrderError::InvalidTransition(_, _) => ErrorCode::InvalidStatusTransition,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Validated input for order creation
///
/// `customer_name` and `table_number` are presence-checked at the API
/// boundary; everything item-related is validated here against the menu.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub organization_id: String,
    pub customer_session_id: Option<String>,
    pub customer_name: String,
    pub table_number: String,
    pub items: Vec<OrderItemInput>,
}

pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
    organizations: Arc<OrganizationStore>,
    menus: Arc<MenuStore>,
}

impl OrderStore {
    pub fn new(
        organizations: Arc<OrganizationStore>,
        menus: Arc<MenuStore>,
        seed: Vec<Order>,
    ) -> Self {
        Self {
            orders: RwLock::new(seed),
            organizations,
            menus,
        }
    }

    /// Create an order - all-or-nothing
    ///
    /// Every submitted item is resolved against the organization's active
    /// menu; name and price are snapshotted and the total is computed
    /// server-side. The write happens only after the whole item list has
    /// validated, so there is never a partially applied order.
    pub fn create(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        if !self.organizations.exists_active(&draft.organization_id) {
            return Err(OrderError::OrganizationNotFound);
        }
        let menu = self
            .menus
            .find_by_organization(&draft.organization_id)
            .ok_or(OrderError::NoActiveMenu)?;

        if draft.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let mut items = Vec::with_capacity(draft.items.len());
        for input in &draft.items {
            let menu_item = menu
                .find_item(&input.item_id)
                .ok_or_else(|| OrderError::UnknownItem(input.item_id.clone()))?;
            if !menu_item.available {
                return Err(OrderError::ItemUnavailable(input.item_id.clone()));
            }
            if input.quantity <= 0 {
                return Err(OrderError::InvalidQuantity(input.item_id.clone()));
            }
            items.push(OrderItem {
                item_id: menu_item.id.clone(),
                name: menu_item.name.clone(),
                price: menu_item.price,
                quantity: input.quantity as u32,
                notes: input.notes.clone(),
            });
        }

        let total_amount: Money = items.iter().map(OrderItem::line_total).sum();
        let ts = now();
        let order = Order {
            id: prefixed_id("ord"),
            organization_id: draft.organization_id,
            customer_session_id: draft.customer_session_id,
            customer_name: draft.customer_name,
            table_number: draft.table_number,
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: ts,
            updated_at: ts,
        };

        self.orders.write().push(order.clone());
        Ok(order)
    }

    /// Orders for a tenant, newest first
    ///
    /// The tenant filter is applied first and is never optional; the
    /// customer-session filter scopes the anonymous "my orders" view.
    pub fn find_by_organization(
        &self,
        organization_id: &str,
        customer_session_id: Option<&str>,
        status: Option<OrderStatus>,
        limit: Option<usize>,
    ) -> Vec<Order> {
        let mut result: Vec<Order> = self
            .orders
            .read()
            .iter()
            .filter(|o| o.organization_id == organization_id)
            .filter(|o| match customer_session_id {
                Some(session) => o.customer_session_id.as_deref() == Some(session),
                None => true,
            })
            .filter(|o| match status {
                Some(s) => o.status == s,
                None => true,
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            result.truncate(limit);
        }
        result
    }

    /// Single order by id
    pub fn find_by_id(&self, order_id: &str) -> Option<Order> {
        self.orders.read().iter().find(|o| o.id == order_id).cloned()
    }

    /// Single order by id, additionally required to belong to the tenant
    pub fn find_by_id_in_org(&self, order_id: &str, organization_id: &str) -> Option<Order> {
        self.orders
            .read()
            .iter()
            .find(|o| o.id == order_id && o.organization_id == organization_id)
            .cloned()
    }

    /// Apply a status transition
    ///
    /// When `organization_id` is given the lookup is tenant-checked, so a
    /// caller scoped to tenant X cannot touch tenant Y's orders. The
    /// transition is validated against the lifecycle graph before applying.
    pub fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
        organization_id: Option<&str>,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| {
                o.id == order_id
                    && organization_id.is_none_or(|org| o.organization_id == org)
            })
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        if order.status.is_terminal() {
            return Err(OrderError::AlreadyClosed(order.status));
        }
        if !order.status.can_transition_to(new_status) {
            return Err(OrderError::InvalidTransition(order.status, new_status));
        }

        order.status = new_status;
        order.updated_at = now();
        Ok(order.clone())
    }

    /// Cancel an order (soft-delete path of the lifecycle)
    pub fn cancel(&self, order_id: &str, organization_id: &str) -> Result<Order, OrderError> {
        self.update_status(order_id, OrderStatus::Cancelled, Some(organization_id))
    }

    /// Platform-wide aggregates: (order count, revenue of delivered orders)
    pub fn platform_totals(&self) -> (usize, Money) {
        let orders = self.orders.read();
        let revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .map(|o| o.total_amount)
            .sum();
        (orders.len(), revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        Menu, MenuCategory, MenuItem, Organization, OrganizationContact, OrganizationSettings,
        OrganizationTheme,
    };

    fn test_org(id: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: id.to_string(),
            theme: OrganizationTheme {
                primary_color: "#000".into(),
                secondary_color: "#111".into(),
                accent_color: "#222".into(),
            },
            contact: OrganizationContact::default(),
            settings: OrganizationSettings::default(),
            is_active: true,
            created_at: now(),
            updated_at: now(),
        }
    }

    fn test_menu(org: &str) -> Menu {
        Menu {
            id: format!("{}-menu", org),
            organization_id: org.to_string(),
            name: "Menu".into(),
            categories: vec![MenuCategory {
                id: "mains".into(),
                name: "Mains".into(),
                description: None,
                items: vec![
                    MenuItem {
                        id: "margherita".into(),
                        name: "Margherita Pizza".into(),
                        description: "".into(),
                        price: 27690,
                        image: None,
                        allergens: None,
                        dietary: None,
                        available: true,
                    },
                    MenuItem {
                        id: "off-menu".into(),
                        name: "Sold Out".into(),
                        description: "".into(),
                        price: 1000,
                        image: None,
                        allergens: None,
                        dietary: None,
                        available: false,
                    },
                ],
                order: 1,
            }],
            is_active: true,
            last_updated: now(),
        }
    }

    fn test_store() -> OrderStore {
        let orgs = Arc::new(OrganizationStore::new(vec![
            test_org("bella-vista"),
            test_org("urban-cafe"),
        ]));
        let menus = Arc::new(MenuStore::new(vec![
            test_menu("bella-vista"),
            test_menu("urban-cafe"),
        ]));
        OrderStore::new(orgs, menus, vec![])
    }

    fn draft(org: &str, items: Vec<OrderItemInput>) -> OrderDraft {
        OrderDraft {
            organization_id: org.to_string(),
            customer_session_id: None,
            customer_name: "A".into(),
            table_number: "3".into(),
            items,
        }
    }

    fn item(id: &str, quantity: i64) -> OrderItemInput {
        OrderItemInput {
            item_id: id.to_string(),
            quantity,
            notes: None,
        }
    }

    #[test]
    fn test_create_computes_total_server_side() {
        let store = test_store();
        let order = store
            .create(draft("bella-vista", vec![item("margherita", 2)]))
            .unwrap();
        assert_eq!(order.total_amount, 55380);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].name, "Margherita Pizza");
    }

    #[test]
    fn test_create_rejects_unknown_item_atomically() {
        let store = test_store();
        let result = store.create(draft(
            "bella-vista",
            vec![item("margherita", 1), item("ghost", 1)],
        ));
        assert!(matches!(result, Err(OrderError::UnknownItem(_))));
        assert!(
            store
                .find_by_organization("bella-vista", None, None, None)
                .is_empty(),
            "a rejected order must leave the store unchanged"
        );
    }

    #[test]
    fn test_create_rejects_unavailable_item() {
        let store = test_store();
        assert!(matches!(
            store.create(draft("bella-vista", vec![item("off-menu", 1)])),
            Err(OrderError::ItemUnavailable(_))
        ));
    }

    #[test]
    fn test_create_rejects_non_positive_quantity() {
        let store = test_store();
        for quantity in [0, -1] {
            assert!(matches!(
                store.create(draft("bella-vista", vec![item("margherita", quantity)])),
                Err(OrderError::InvalidQuantity(_))
            ));
        }
    }

    #[test]
    fn test_create_rejects_empty_order() {
        let store = test_store();
        assert!(matches!(
            store.create(draft("bella-vista", vec![])),
            Err(OrderError::EmptyOrder)
        ));
    }

    #[test]
    fn test_create_requires_active_organization() {
        let store = test_store();
        assert!(matches!(
            store.create(draft("ghost-org", vec![item("margherita", 1)])),
            Err(OrderError::OrganizationNotFound)
        ));
    }

    #[test]
    fn test_full_lifecycle_then_frozen() {
        let store = test_store();
        let order = store
            .create(draft("bella-vista", vec![item("margherita", 2)]))
            .unwrap();

        for status in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
        ] {
            store.update_status(&order.id, status, None).unwrap();
        }

        // Delivered is terminal: nothing moves it anymore
        assert!(matches!(
            store.update_status(&order.id, OrderStatus::Pending, None),
            Err(OrderError::AlreadyClosed(OrderStatus::Delivered))
        ));
    }

    #[test]
    fn test_illegal_skip_rejected() {
        let store = test_store();
        let order = store
            .create(draft("bella-vista", vec![item("margherita", 1)]))
            .unwrap();
        assert!(matches!(
            store.update_status(&order.id, OrderStatus::Delivered, None),
            Err(OrderError::InvalidTransition(
                OrderStatus::Pending,
                OrderStatus::Delivered
            ))
        ));
    }

    #[test]
    fn test_tenant_isolation() {
        let store = test_store();
        let a = store
            .create(draft("bella-vista", vec![item("margherita", 1)]))
            .unwrap();
        store
            .create(draft("urban-cafe", vec![item("margherita", 1)]))
            .unwrap();

        let bella = store.find_by_organization("bella-vista", None, None, None);
        assert_eq!(bella.len(), 1);
        assert_eq!(bella[0].id, a.id);

        // Tenant-checked lookup refuses foreign ids; unchecked lookup sees all
        assert!(store.find_by_id_in_org(&a.id, "urban-cafe").is_none());
        assert!(store.find_by_id_in_org(&a.id, "bella-vista").is_some());
        assert!(store.find_by_id(&a.id).is_some());

        // Cross-tenant status tampering fails as not-found
        assert!(matches!(
            store.update_status(&a.id, OrderStatus::Preparing, Some("urban-cafe")),
            Err(OrderError::NotFound(_))
        ));
    }

    #[test]
    fn test_customer_session_scoping() {
        let store = test_store();
        let mut d = draft("bella-vista", vec![item("margherita", 1)]);
        d.customer_session_id = Some("S1".into());
        let mine = store.create(d).unwrap();

        let mut other = draft("bella-vista", vec![item("margherita", 1)]);
        other.customer_session_id = Some("S2".into());
        store.create(other).unwrap();

        let scoped = store.find_by_organization("bella-vista", Some("S1"), None, None);
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, mine.id);
    }

    #[test]
    fn test_cancel_paths() {
        let store = test_store();
        let order = store
            .create(draft("bella-vista", vec![item("margherita", 1)]))
            .unwrap();

        let cancelled = store.cancel(&order.id, "bella-vista").unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);

        // Cancelling again is an error, not a silent no-op
        assert!(matches!(
            store.cancel(&order.id, "bella-vista"),
            Err(OrderError::AlreadyClosed(OrderStatus::Cancelled))
        ));

        // Ready orders can no longer be cancelled
        let order = store
            .create(draft("bella-vista", vec![item("margherita", 1)]))
            .unwrap();
        store
            .update_status(&order.id, OrderStatus::Preparing, None)
            .unwrap();
        store
            .update_status(&order.id, OrderStatus::Ready, None)
            .unwrap();
        assert!(matches!(
            store.cancel(&order.id, "bella-vista"),
            Err(OrderError::InvalidTransition(OrderStatus::Ready, _))
        ));
    }

    #[test]
    fn test_list_sorted_newest_first_with_limit() {
        let store = test_store();
        for _ in 0..3 {
            store
                .create(draft("bella-vista", vec![item("margherita", 1)]))
                .unwrap();
        }
        let all = store.find_by_organization("bella-vista", None, None, None);
        assert_eq!(all.len(), 3);
        assert!(all[0].created_at >= all[1].created_at);
        assert!(all[1].created_at >= all[2].created_at);

        let limited = store.find_by_organization("bella-vista", None, None, Some(2));
        assert_eq!(limited.len(), 2);
    }
}
