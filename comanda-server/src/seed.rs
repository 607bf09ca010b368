//! Canonical seed data
//!
//! The single source of demo state, loaded on every process start (state is
//! volatile by design). All prices are integer MWK minor units.
//!
//! Demo credentials: `superadmin@comanda.app` / `admin123`,
//! `manager@bellavista.com` and `admin@urbancafe.com` / `staff123`.

use chrono::Duration;
use shared::auth::UserRole;
use shared::models::{
    DietaryTag, Menu, MenuCategory, MenuItem, Order, OrderItem, OrderStatus, Organization,
    OrganizationContact, OrganizationSettings, OrganizationTheme, StaffRole, StaffUser,
};
use shared::util::now;

use crate::auth::{UserAccount, authenticator::hash_password};

pub fn organizations() -> Vec<Organization> {
    let ts = now();
    vec![
        Organization {
            id: "bella-vista".into(),
            name: "Bella Vista Restaurant".into(),
            theme: OrganizationTheme {
                primary_color: "#2d3748".into(),
                secondary_color: "#4a5568".into(),
                accent_color: "#f6ad55".into(),
            },
            contact: OrganizationContact {
                phone: Some("+1 (555) 123-4567".into()),
                website: Some("www.bellavista.com".into()),
            },
            settings: OrganizationSettings::default(),
            is_active: true,
            created_at: ts,
            updated_at: ts,
        },
        Organization {
            id: "urban-cafe".into(),
            name: "Urban Café".into(),
            theme: OrganizationTheme {
                primary_color: "#1a202c".into(),
                secondary_color: "#2d3748".into(),
                accent_color: "#68d391".into(),
            },
            contact: OrganizationContact {
                phone: Some("+1 (555) 987-6543".into()),
                website: Some("www.urbancafe.com".into()),
            },
            settings: OrganizationSettings::default(),
            is_active: true,
            created_at: ts,
            updated_at: ts,
        },
    ]
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    dietary: Option<Vec<DietaryTag>>,
) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        image: None,
        allergens: None,
        dietary,
        available: true,
    }
}

pub fn menus() -> Vec<Menu> {
    use DietaryTag::*;

    let margherita = item(
        "margherita",
        "Margherita Pizza",
        "Fresh tomato sauce, mozzarella, basil, olive oil",
        27690,
        Some(vec![Vegetarian]),
    );
    let carbonara = item(
        "carbonara",
        "Pasta Carbonara",
        "Creamy pasta with pancetta, egg, and parmesan",
        30970,
        None,
    );
    let tiramisu = item(
        "tiramisu",
        "Tiramisu",
        "Classic Italian dessert with coffee and mascarpone",
        14650,
        Some(vec![Vegetarian]),
    );

    let avocado_toast = item(
        "avocado-toast",
        "Avocado Toast",
        "Sourdough bread with smashed avocado, lime, and sea salt",
        21170,
        Some(vec![Vegan, DairyFree]),
    );
    let acai_bowl = item(
        "acai-bowl",
        "Acai Bowl",
        "Açaí with granola, berries, and coconut flakes",
        24430,
        Some(vec![Vegan, GlutenFree, DairyFree]),
    );
    let cappuccino = item(
        "cappuccino",
        "Cappuccino",
        "Rich espresso with steamed milk foam",
        8130,
        Some(vec![Vegetarian]),
    );

    let ts = now();
    vec![
        Menu {
            id: "bella-vista-main".into(),
            organization_id: "bella-vista".into(),
            name: "Main Menu".into(),
            categories: vec![
                MenuCategory {
                    id: "mains".into(),
                    name: "Main Courses".into(),
                    description: None,
                    items: vec![margherita, carbonara],
                    order: 1,
                },
                MenuCategory {
                    id: "desserts".into(),
                    name: "Desserts".into(),
                    description: None,
                    items: vec![tiramisu],
                    order: 2,
                },
            ],
            is_active: true,
            last_updated: ts,
        },
        Menu {
            id: "urban-cafe-all-day".into(),
            organization_id: "urban-cafe".into(),
            name: "All Day Menu".into(),
            categories: vec![
                MenuCategory {
                    id: "food".into(),
                    name: "Food".into(),
                    description: None,
                    items: vec![avocado_toast, acai_bowl],
                    order: 1,
                },
                MenuCategory {
                    id: "beverages".into(),
                    name: "Beverages".into(),
                    description: None,
                    items: vec![cappuccino],
                    order: 2,
                },
            ],
            is_active: true,
            last_updated: ts,
        },
    ]
}

pub fn orders() -> Vec<Order> {
    let ts = now();
    vec![
        Order {
            id: "order-1".into(),
            organization_id: "bella-vista".into(),
            customer_session_id: None,
            customer_name: "Sarah Johnson".into(),
            table_number: "12".into(),
            items: vec![
                OrderItem {
                    item_id: "margherita".into(),
                    name: "Margherita Pizza".into(),
                    price: 27690,
                    quantity: 1,
                    notes: None,
                },
                OrderItem {
                    item_id: "carbonara".into(),
                    name: "Pasta Carbonara".into(),
                    price: 30970,
                    quantity: 1,
                    notes: None,
                },
            ],
            total_amount: 58660,
            status: OrderStatus::Preparing,
            created_at: ts - Duration::minutes(15),
            updated_at: ts - Duration::minutes(15),
        },
        Order {
            id: "order-2".into(),
            organization_id: "urban-cafe".into(),
            customer_session_id: None,
            customer_name: "Mike Chen".into(),
            table_number: "5".into(),
            items: vec![
                OrderItem {
                    item_id: "avocado-toast".into(),
                    name: "Avocado Toast".into(),
                    price: 21170,
                    quantity: 2,
                    notes: None,
                },
                OrderItem {
                    item_id: "cappuccino".into(),
                    name: "Cappuccino".into(),
                    price: 8130,
                    quantity: 1,
                    notes: None,
                },
            ],
            total_amount: 50470,
            status: OrderStatus::Ready,
            created_at: ts - Duration::minutes(8),
            updated_at: ts - Duration::minutes(2),
        },
    ]
}

pub fn staff() -> Vec<StaffUser> {
    let ts = now();
    vec![
        StaffUser {
            id: "staff-1".into(),
            organization_id: "bella-vista".into(),
            email: "manager@bellavista.com".into(),
            name: "John Manager".into(),
            role: StaffRole::Manager,
            created_at: ts,
        },
        StaffUser {
            id: "staff-2".into(),
            organization_id: "urban-cafe".into(),
            email: "admin@urbancafe.com".into(),
            name: "Sarah Admin".into(),
            role: StaffRole::Admin,
            created_at: ts,
        },
    ]
}

/// Login directory backing the default [`PasswordAuthenticator`]
///
/// Demo passwords are argon2-hashed at startup.
pub fn user_accounts() -> Vec<UserAccount> {
    let hash = |password: &str| {
        hash_password(password).expect("seed password hashing cannot fail")
    };

    vec![
        UserAccount {
            id: "superadmin-1".into(),
            email: "superadmin@comanda.app".into(),
            name: "Super Admin".into(),
            role: UserRole::Superadmin,
            organization_id: None,
            password_hash: hash("admin123"),
        },
        UserAccount {
            id: "staff-1".into(),
            email: "manager@bellavista.com".into(),
            name: "John Manager".into(),
            role: UserRole::Manager,
            organization_id: Some("bella-vista".into()),
            password_hash: hash("staff123"),
        },
        UserAccount {
            id: "staff-2".into(),
            email: "admin@urbancafe.com".into(),
            name: "Sarah Admin".into(),
            role: UserRole::Admin,
            organization_id: Some("urban-cafe".into()),
            password_hash: hash("staff123"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_orders_reference_seed_menus() {
        let menus = menus();
        for order in orders() {
            let menu = menus
                .iter()
                .find(|m| m.organization_id == order.organization_id)
                .expect("every seed order belongs to a seeded organization");
            for line in &order.items {
                let item = menu.find_item(&line.item_id).expect("seed item exists");
                assert_eq!(item.price, line.price, "snapshot price matches menu");
            }
        }
    }

    #[test]
    fn test_seed_order_totals_consistent() {
        for order in orders() {
            let expected: i64 = order.items.iter().map(|i| i.line_total()).sum();
            assert_eq!(order.total_amount, expected);
        }
    }

    #[test]
    fn test_seed_accounts_cover_both_tenants() {
        let accounts = user_accounts();
        assert!(accounts.iter().any(|a| a.organization_id.is_none()));
        assert!(
            accounts
                .iter()
                .any(|a| a.organization_id.as_deref() == Some("bella-vista"))
        );
        assert!(
            accounts
                .iter()
                .any(|a| a.organization_id.as_deref() == Some("urban-cafe"))
        );
    }
}
