//! Menu Model

use crate::types::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dietary tags attached to menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

/// A single orderable dish
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in minor units of the organization's currency
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Vec<DietaryTag>>,
    pub available: bool,
}

/// Ordered group of menu items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<MenuItem>,
    /// Display sequence only, not semantically load-bearing
    pub order: u32,
}

/// Menu entity - at most one active menu per organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub categories: Vec<MenuCategory>,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

impl Menu {
    /// Look up an item anywhere in the menu by id
    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == item_id)
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update category payload - narrow, explicitly-typed contract
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub order: Option<u32>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub dietary: Option<Vec<DietaryTag>>,
    /// Defaults to true
    pub available: Option<bool>,
}

/// Update menu item payload - narrow, explicitly-typed contract
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub image: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub dietary: Option<Vec<DietaryTag>>,
    pub available: Option<bool>,
}
