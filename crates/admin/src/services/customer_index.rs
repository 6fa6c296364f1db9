//! Customer lookups built from a snapshot.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use orderdesk_core::{Customer, CustomerId, Order};

/// Display name for orders whose customer is not in the snapshot.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Number of orders shown in a customer's recent-orders list.
pub const RECENT_ORDER_LIMIT: usize = 5;

/// Hash-map index over a customers/orders snapshot.
///
/// Borrowed from the snapshot it was built from; rebuild it whenever the
/// snapshot changes.
#[derive(Debug, Clone, Default)]
pub struct CustomerIndex<'a> {
    customers: HashMap<&'a str, &'a Customer>,
    orders_by_customer: HashMap<&'a str, Vec<&'a Order>>,
}

impl<'a> CustomerIndex<'a> {
    #[must_use]
    pub fn build(customers: &'a [Customer], orders: &'a [Order]) -> Self {
        let customers_by_id: HashMap<&str, &Customer> = customers
            .iter()
            .map(|c| (c.customer_id.as_str(), c))
            .collect();

        let mut orders_by_customer: HashMap<&str, Vec<&Order>> = HashMap::new();
        for order in orders {
            orders_by_customer
                .entry(order.customer_id.as_str())
                .or_default()
                .push(order);
        }

        tracing::debug!(
            customers = customers_by_id.len(),
            customers_with_orders = orders_by_customer.len(),
            "Built customer index"
        );

        Self {
            customers: customers_by_id,
            orders_by_customer,
        }
    }

    /// Look up a customer by ID.
    #[must_use]
    pub fn customer(&self, id: &CustomerId) -> Option<&'a Customer> {
        self.customers.get(id.as_str()).copied()
    }

    /// Orders placed by a customer, in snapshot order. Empty when none.
    #[must_use]
    pub fn orders_for(&self, id: &CustomerId) -> &[&'a Order] {
        self.orders_by_customer
            .get(id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Customer name, if the customer exists.
    #[must_use]
    pub fn customer_name(&self, id: &CustomerId) -> Option<&'a str> {
        self.customer(id).map(|c| c.name.as_str())
    }

    /// Customer name, or [`UNKNOWN_CUSTOMER`] for dangling references.
    #[must_use]
    pub fn display_name(&self, id: &CustomerId) -> &'a str {
        self.customer_name(id).unwrap_or(UNKNOWN_CUSTOMER)
    }

    /// Number of indexed customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Detail view for one customer: totals and most recent orders.
    #[must_use]
    pub fn summary(&self, id: &CustomerId) -> Option<CustomerSummary<'a>> {
        let customer = self.customer(id)?;
        let orders = self.orders_for(id);

        let total_spent_usd: Decimal = orders.iter().map(|o| o.price().to_usd()).sum();

        let mut recent_orders = orders.to_vec();
        recent_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_orders.truncate(RECENT_ORDER_LIMIT);

        Some(CustomerSummary {
            customer,
            total_orders: orders.len(),
            total_spent_usd,
            recent_orders,
        })
    }
}

/// Aggregated view of a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary<'a> {
    pub customer: &'a Customer,
    pub total_orders: usize,
    /// Sum of all order totals converted to USD.
    pub total_spent_usd: Decimal,
    /// Newest first, at most [`RECENT_ORDER_LIMIT`].
    pub recent_orders: Vec<&'a Order>,
}
