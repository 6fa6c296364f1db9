//! Filtered order listing.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use orderdesk_admin::{
    error::AppError,
    services::{DashboardSession, DashboardStats, RegionFilter, StatusFilter},
    state::AppState,
};
use orderdesk_core::Order;

use super::stats;

/// Filters given on the command line.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub region: RegionFilter,
    pub status: StatusFilter,
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl OrderQuery {
    /// Apply the query to a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDateRange`] if `from` is after `to`.
    pub fn session(&self, state: &AppState) -> Result<DashboardSession, AppError> {
        let mut session = state.session();
        session.set_region(self.region);
        session.set_status(self.status);
        if let Some(search) = &self.search {
            session.set_search(search.as_str());
        }
        session.set_date_range(self.from, self.to)?;
        Ok(session)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderRow<'a> {
    #[serde(flatten)]
    order: &'a Order,
    customer_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderListing<'a> {
    stats: DashboardStats,
    orders: Vec<OrderRow<'a>>,
}

/// Print orders matching `query`, newest first.
///
/// # Errors
///
/// Returns an error if the date range is invalid or writing fails.
pub fn list(
    state: &AppState,
    query: &OrderQuery,
    limit: usize,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = query.session(state)?;
    let index = state.customer_index();
    let orders = session.filtered(state.snapshot(), &index);
    let summary = session.stats(&orders);

    tracing::info!(
        matched = orders.len(),
        total = state.snapshot().orders.len(),
        "Listed orders"
    );

    if json {
        let listing = OrderListing {
            stats: summary,
            orders: orders
                .iter()
                .map(|&order| OrderRow {
                    order,
                    customer_name: index.display_name(&order.customer_id),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    if orders.is_empty() {
        writeln!(out, "No orders match the current filters.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<36}  {:<10}  {:<4}  {:<20}  {:<22}  {:>3}  {:>10}  {}",
        "Order", "Date", "Reg", "Customer", "Product", "Qty", "Total", "Status"
    )?;
    for order in orders.iter().take(limit) {
        writeln!(
            out,
            "{:<36}  {:<10}  {:<4}  {:<20}  {:<22}  {:>3}  {:>10}  {}",
            order.id,
            order.created_date(),
            order.region,
            index.display_name(&order.customer_id),
            order.product,
            order.quantity,
            order.price(),
            order.status
        )?;
    }
    if orders.len() > limit {
        writeln!(out, "... showing {limit} of {} orders", orders.len())?;
    }

    writeln!(out)?;
    stats::render(&summary, out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use orderdesk_core::{OrderStatus, Region};

    use super::*;
    use crate::commands::test_support::{output, state};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_json_listing_respects_filters() {
        let state = state();
        let query = OrderQuery {
            region: Region::Uk.into(),
            ..OrderQuery::default()
        };
        let mut buf = Vec::new();
        list(&state, &query, 10, true, &mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        let orders = json["orders"].as_array().unwrap();
        assert_eq!(orders.len(), 8);
        assert!(orders.iter().all(|o| o["region"] == "UK"));
        assert!(orders.iter().all(|o| o["customerName"].is_string()));
        assert_eq!(json["stats"]["totalOrders"], 8);
    }

    #[test]
    fn test_table_is_limited() {
        let state = state();
        let mut buf = Vec::new();
        list(&state, &OrderQuery::default(), 5, false, &mut buf).unwrap();
        let text = output(buf);

        assert!(text.contains("... showing 5 of 24 orders"));
        assert!(text.contains("Total orders:   24"));
    }

    #[test]
    fn test_no_matches_message() {
        let state = state();
        let query = OrderQuery {
            search: Some("no such product anywhere".to_string()),
            ..OrderQuery::default()
        };
        let mut buf = Vec::new();
        list(&state, &query, 10, false, &mut buf).unwrap();

        assert_eq!(output(buf).trim(), "No orders match the current filters.");
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let state = state();
        let query = OrderQuery {
            status: OrderStatus::Pending.into(),
            from: Some(date(2024, 2, 1)),
            to: Some(date(2024, 1, 1)),
            ..OrderQuery::default()
        };
        let mut buf = Vec::new();
        let err = list(&state, &query, 10, false, &mut buf).unwrap_err();

        assert_eq!(err.to_string(), "Invalid date range: Start date cannot be after end date");
        assert!(buf.is_empty());
    }
}
