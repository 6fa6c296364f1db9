//! Dashboard totals and regional breakdown.

use rust_decimal::Decimal;
use serde::Serialize;

use orderdesk_core::{Currency, Order, OrderStatus, Region};

/// Summary figures for the dashboard header cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Sum of every order total converted to USD.
    pub total_revenue: Decimal,
    pub delivered_count: usize,
    pub processing_count: usize,
    /// One entry per region present, in the order regions were first seen.
    pub region_stats: Vec<RegionStats>,
}

/// Per-region totals, kept in the region's own currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub region: Region,
    pub total_orders: usize,
    /// Sum of native order totals; not converted.
    pub total_revenue: Decimal,
    /// Currency of the last order seen for this region.
    pub currency: Currency,
}

impl DashboardStats {
    /// Aggregate a slice of orders.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        Self::aggregate(orders)
    }

    /// Aggregate any sequence of order references, e.g. a filter result.
    #[must_use]
    pub fn aggregate<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut stats = Self::default();

        for order in orders {
            stats.total_orders += 1;
            stats.total_revenue += order.price().to_usd();

            match order.status {
                OrderStatus::Delivered => stats.delivered_count += 1,
                OrderStatus::Processing => stats.processing_count += 1,
                _ => {}
            }

            match stats.region_stats.iter_mut().find(|r| r.region == order.region) {
                Some(region) => {
                    region.total_orders += 1;
                    region.total_revenue += order.total_amount;
                    region.currency = order.currency;
                }
                None => stats.region_stats.push(RegionStats {
                    region: order.region,
                    total_orders: 1,
                    total_revenue: order.total_amount,
                    currency: order.currency,
                }),
            }
        }

        tracing::debug!(
            total_orders = stats.total_orders,
            regions = stats.region_stats.len(),
            "Aggregated dashboard stats"
        );

        stats
    }

    /// Stats for a single region, if any of its orders were aggregated.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&RegionStats> {
        self.region_stats.iter().find(|r| r.region == region)
    }
}
