//! Tenant-scoped Analytics Handlers
//!
//! Aggregates the organization's orders for a period. Everything is
//! computed on demand from the order store - no precomputed rollups.

use std::collections::{BTreeMap, HashMap};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::types::Money;
use shared::util::now;

use super::require_org;
use crate::core::ServerState;
use crate::utils::AppResult;

pub fn routes() -> Router<ServerState> {
    Router::new().route("/analytics", get(get_analytics))
}

// ============================================================================
// Response Types
// ============================================================================

/// Best-selling item for the period
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub item_id: String,
    pub name: String,
    pub count: u64,
    pub revenue: Money,
}

/// Aggregate order stats for a period
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub period: String,
    pub total_orders: usize,
    pub total_revenue: Money,
    pub avg_order_value: Money,
    pub orders_by_status: BTreeMap<&'static str, usize>,
    pub top_items: Vec<TopItem>,
}

/// Analytics envelope
#[derive(Debug, Serialize)]
pub struct AnalyticsEnvelope {
    pub success: bool,
    pub analytics: Analytics,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// today (default) | week | month
    pub period: Option<String>,
}

/// Start of the reporting window for a period keyword
fn period_start(period: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match period {
        "week" => now - Duration::days(7),
        "month" => now - Duration::days(30),
        _ => now.date_naive().and_time(NaiveTime::MIN).and_utc(),
    }
}

// ============================================================================
// Handler
// ============================================================================

/// GET /api/org/{org_id}/analytics?period=today|week|month
pub async fn get_analytics(
    State(state): State<ServerState>,
    Path(org_id): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsEnvelope>> {
    require_org(&state, &org_id)?;

    let period = query.period.unwrap_or_else(|| "today".to_string());
    let start = period_start(&period, now());

    let orders: Vec<_> = state
        .orders
        .find_by_organization(&org_id, None, None, None)
        .into_iter()
        .filter(|o| o.created_at >= start)
        .collect();

    let total_orders = orders.len();
    let total_revenue: Money = orders.iter().map(|o| o.total_amount).sum();
    let avg_order_value = if total_orders > 0 {
        total_revenue / total_orders as Money
    } else {
        0
    };

    let mut orders_by_status: BTreeMap<&'static str, usize> = BTreeMap::new();
    for order in &orders {
        *orders_by_status.entry(order.status.as_str()).or_insert(0) += 1;
    }

    // Item tallies across all period orders, top 5 by units sold
    let mut item_counts: HashMap<String, TopItem> = HashMap::new();
    for order in &orders {
        for item in &order.items {
            let entry = item_counts
                .entry(item.item_id.clone())
                .or_insert_with(|| TopItem {
                    item_id: item.item_id.clone(),
                    name: item.name.clone(),
                    count: 0,
                    revenue: 0,
                });
            entry.count += item.quantity as u64;
            entry.revenue += item.line_total();
        }
    }
    let mut top_items: Vec<TopItem> = item_counts.into_values().collect();
    top_items.sort_by(|a, b| b.count.cmp(&a.count));
    top_items.truncate(5);

    Ok(Json(AnalyticsEnvelope {
        success: true,
        analytics: Analytics {
            period,
            total_orders,
            total_revenue,
            avg_order_value,
            orders_by_status,
            top_items,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_start() {
        let now = now();
        assert!(period_start("week", now) < period_start("today", now));
        assert!(period_start("month", now) < period_start("week", now));
        // Unknown keywords fall back to today
        assert_eq!(period_start("bogus", now), period_start("today", now));
    }
}
