//! Menu Store
//!
//! One active menu per organization; categories and items are mutated
//! through narrow typed payloads, each operation tenant-scoped.

use parking_lot::RwLock;
use shared::models::{
    CategoryCreate, CategoryUpdate, Menu, MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate,
};
use shared::util::{now, prefixed_id};

use super::{StoreError, StoreResult};

pub struct MenuStore {
    menus: RwLock<Vec<Menu>>,
}

impl MenuStore {
    pub fn new(seed: Vec<Menu>) -> Self {
        Self {
            menus: RwLock::new(seed),
        }
    }

    /// Active menu for an organization
    pub fn find_by_organization(&self, organization_id: &str) -> Option<Menu> {
        self.menus
            .read()
            .iter()
            .find(|m| m.organization_id == organization_id && m.is_active)
            .cloned()
    }

    /// Append a category to the organization's active menu
    pub fn add_category(
        &self,
        organization_id: &str,
        data: CategoryCreate,
    ) -> StoreResult<MenuCategory> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;

        let category = MenuCategory {
            id: prefixed_id("cat"),
            name: data.name,
            description: data.description,
            items: Vec::new(),
            order: menu.categories.len() as u32 + 1,
        };
        menu.categories.push(category.clone());
        menu.last_updated = now();
        Ok(category)
    }

    /// Append an item to a category of the organization's active menu
    pub fn add_item(
        &self,
        organization_id: &str,
        category_id: &str,
        data: MenuItemCreate,
    ) -> StoreResult<MenuItem> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;
        let category = category_mut(menu, category_id)?;

        let item = MenuItem {
            id: prefixed_id("item"),
            name: data.name,
            description: data.description,
            price: data.price,
            image: data.image,
            allergens: data.allergens,
            dietary: data.dietary,
            available: data.available.unwrap_or(true),
        };
        category.items.push(item.clone());
        menu.last_updated = now();
        Ok(item)
    }

    /// Apply a typed partial update to a category
    pub fn update_category(
        &self,
        organization_id: &str,
        category_id: &str,
        data: CategoryUpdate,
    ) -> StoreResult<MenuCategory> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;
        let category = category_mut(menu, category_id)?;

        if let Some(name) = data.name {
            category.name = name;
        }
        if let Some(description) = data.description {
            category.description = Some(description);
        }
        if let Some(order) = data.order {
            category.order = order;
        }
        let updated = category.clone();
        menu.last_updated = now();
        Ok(updated)
    }

    /// Apply a typed partial update to a menu item
    pub fn update_item(
        &self,
        organization_id: &str,
        category_id: &str,
        item_id: &str,
        data: MenuItemUpdate,
    ) -> StoreResult<MenuItem> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;
        let category = category_mut(menu, category_id)?;
        let item = category
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| StoreError::NotFound(format!("Item {} not found", item_id)))?;

        if let Some(name) = data.name {
            item.name = name;
        }
        if let Some(description) = data.description {
            item.description = description;
        }
        if let Some(price) = data.price {
            item.price = price;
        }
        if let Some(image) = data.image {
            item.image = Some(image);
        }
        if let Some(allergens) = data.allergens {
            item.allergens = Some(allergens);
        }
        if let Some(dietary) = data.dietary {
            item.dietary = Some(dietary);
        }
        if let Some(available) = data.available {
            item.available = available;
        }
        let updated = item.clone();
        menu.last_updated = now();
        Ok(updated)
    }

    /// Remove a category (and all its items)
    pub fn delete_category(&self, organization_id: &str, category_id: &str) -> StoreResult<()> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;
        let index = menu
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| StoreError::NotFound(format!("Category {} not found", category_id)))?;
        menu.categories.remove(index);
        menu.last_updated = now();
        Ok(())
    }

    /// Remove a single item from a category
    pub fn delete_item(
        &self,
        organization_id: &str,
        category_id: &str,
        item_id: &str,
    ) -> StoreResult<()> {
        let mut menus = self.menus.write();
        let menu = active_menu_mut(&mut menus, organization_id)?;
        let category = category_mut(menu, category_id)?;
        let index = category
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| StoreError::NotFound(format!("Item {} not found", item_id)))?;
        category.items.remove(index);
        menu.last_updated = now();
        Ok(())
    }
}

fn active_menu_mut<'a>(
    menus: &'a mut Vec<Menu>,
    organization_id: &str,
) -> StoreResult<&'a mut Menu> {
    menus
        .iter_mut()
        .find(|m| m.organization_id == organization_id && m.is_active)
        .ok_or_else(|| StoreError::NotFound("Menu not found".to_string()))
}

fn category_mut<'a>(menu: &'a mut Menu, category_id: &str) -> StoreResult<&'a mut MenuCategory> {
    menu.categories
        .iter_mut()
        .find(|c| c.id == category_id)
        .ok_or_else(|| StoreError::NotFound(format!("Category {} not found", category_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_menu(org: &str) -> Menu {
        Menu {
            id: format!("{}-main", org),
            organization_id: org.to_string(),
            name: "Main Menu".into(),
            categories: vec![MenuCategory {
                id: "mains".into(),
                name: "Main Courses".into(),
                description: None,
                items: vec![MenuItem {
                    id: "margherita".into(),
                    name: "Margherita Pizza".into(),
                    description: "Tomato, mozzarella, basil".into(),
                    price: 27690,
                    image: None,
                    allergens: None,
                    dietary: None,
                    available: true,
                }],
                order: 1,
            }],
            is_active: true,
            last_updated: now(),
        }
    }

    #[test]
    fn test_find_is_tenant_scoped() {
        let store = MenuStore::new(vec![seed_menu("a"), seed_menu("b")]);
        assert_eq!(store.find_by_organization("a").unwrap().organization_id, "a");
        assert!(store.find_by_organization("c").is_none());
    }

    #[test]
    fn test_add_category_assigns_id_and_order() {
        let store = MenuStore::new(vec![seed_menu("a")]);
        let cat = store
            .add_category(
                "a",
                CategoryCreate {
                    name: "Desserts".into(),
                    description: None,
                },
            )
            .unwrap();
        assert!(cat.id.starts_with("cat-"));
        assert_eq!(cat.order, 2);
    }

    #[test]
    fn test_add_item_to_unknown_category() {
        let store = MenuStore::new(vec![seed_menu("a")]);
        let result = store.add_item(
            "a",
            "ghost",
            MenuItemCreate {
                name: "X".into(),
                description: "".into(),
                price: 100,
                image: None,
                allergens: None,
                dietary: None,
                available: None,
            },
        );
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_update_item_partial() {
        let store = MenuStore::new(vec![seed_menu("a")]);
        let item = store
            .update_item(
                "a",
                "mains",
                "margherita",
                MenuItemUpdate {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!item.available);
        assert_eq!(item.price, 27690, "untouched fields must survive");
    }

    #[test]
    fn test_delete_item_then_missing() {
        let store = MenuStore::new(vec![seed_menu("a")]);
        store.delete_item("a", "mains", "margherita").unwrap();
        assert!(matches!(
            store.delete_item("a", "mains", "margherita"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_mutation_requires_matching_tenant() {
        let store = MenuStore::new(vec![seed_menu("a")]);
        assert!(matches!(
            store.delete_category("b", "mains"),
            Err(StoreError::NotFound(_))
        ));
    }
}
