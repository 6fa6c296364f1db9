//! Pure transforms over a [`Snapshot`](crate::data::Snapshot).
//!
//! The filter engine and the aggregator are independent; the customer index
//! feeds names into the filter engine and backs the customer detail view.

pub mod customer_index;
pub mod dashboard_stats;
pub mod order_filter;
pub mod session;

pub use customer_index::{CustomerIndex, CustomerSummary, UNKNOWN_CUSTOMER};
pub use dashboard_stats::{DashboardStats, RegionStats};
pub use order_filter::{FilterState, RegionFilter, StatusFilter, filter_orders};
pub use session::DashboardSession;
