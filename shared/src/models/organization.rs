//! Organization Model

use crate::types::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported settlement currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    MWK,
    USD,
    EUR,
    GBP,
}

/// Organization branding colors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationTheme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
}

/// Organization contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Per-tenant operational settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSettings {
    pub currency: Currency,
    /// Tax rate as a fraction (0.165 = 16.5%)
    pub tax_rate: f64,
    /// Service charge rate as a fraction
    pub service_charge: f64,
    pub allow_tips: bool,
    pub require_table_number: bool,
    pub enable_online_payment: bool,
    pub qr_code_expiry_minutes: u32,
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            currency: Currency::MWK,
            tax_rate: 0.0,
            service_charge: 0.0,
            allow_tips: true,
            require_table_number: true,
            enable_online_payment: false,
            qr_code_expiry_minutes: 60,
        }
    }
}

/// Organization entity - the tenant record
///
/// The `id` doubles as the tenant key (subdomain label). Organizations are
/// never physically removed; `delete` flips `is_active` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub theme: OrganizationTheme,
    pub contact: OrganizationContact,
    pub settings: OrganizationSettings,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create organization payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCreate {
    pub id: String,
    pub name: String,
    pub theme: OrganizationTheme,
    #[serde(default)]
    pub contact: OrganizationContact,
    /// Defaults are applied when omitted
    pub settings: Option<OrganizationSettings>,
}

/// Update organization payload
///
/// Nested `theme`/`contact`/`settings` are replaced wholesale, not
/// deep-merged field-by-field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub theme: Option<OrganizationTheme>,
    pub contact: Option<OrganizationContact>,
    pub settings: Option<OrganizationSettings>,
    pub is_active: Option<bool>,
}

/// Platform-wide aggregates for the superadmin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStats {
    pub total_organizations: usize,
    pub active_organizations: usize,
    pub total_orders: usize,
    pub total_revenue: Money,
}
