//! Order filter engine.
//!
//! A [`FilterState`] combines four predicates with logical AND:
//!
//! 1. region: `All` or an exact region
//! 2. status: `All` or an exact status
//! 3. search: case-insensitive substring of the order id, product, customer
//!    name or status (only when the trimmed term is non-empty)
//! 4. date range: the order's UTC calendar date lies within the range (only
//!    when a bound is set)
//!
//! Filtering is stable: the output is a subsequence of the input.

use core::fmt;
use std::str::FromStr;

use orderdesk_core::{CustomerId, DateRange, Order, OrderStatus, ParseEnumError, Region};

/// Value used by the dashboard's selects to mean "no filter".
pub const ALL: &str = "All";

/// Region selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    #[must_use]
    pub fn matches(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == region,
        }
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        Self::Only(region)
    }
}

impl FromStr for RegionFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad(ALL),
            Self::Only(region) => fmt::Display::fmt(region, f),
        }
    }
}

/// Status selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        Self::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad(ALL),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// The user's filter selections.
///
/// `Default` is the "show everything" state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub region: RegionFilter,
    pub status: StatusFilter,
    /// Raw search text as typed; trimmed and lower-cased when applied.
    pub search: String,
    pub date_range: DateRange,
}

impl FilterState {
    /// Whether every filter is off.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.region == RegionFilter::All
            && self.status == StatusFilter::All
            && self.search.trim().is_empty()
            && !self.date_range.is_active()
    }

    /// Single-order predicate. `customer_name` is the resolved name of the
    /// order's customer, `None` when the customer is unknown.
    #[must_use]
    pub fn matches(&self, order: &Order, customer_name: Option<&str>) -> bool {
        Matcher::new(self).matches(order, customer_name)
    }
}

/// Apply `state` to `orders`, keeping the input order.
///
/// `resolve_name` maps a customer ID to the customer's name; it is only
/// consulted while a search term is active. Unresolved customers never match
/// on name.
pub fn filter_orders<'o, 'n, I, F>(orders: I, state: &FilterState, resolve_name: F) -> Vec<&'o Order>
where
    I: IntoIterator<Item = &'o Order>,
    F: Fn(&CustomerId) -> Option<&'n str>,
{
    let matcher = Matcher::new(state);
    let mut considered = 0_usize;

    let filtered: Vec<&Order> = orders
        .into_iter()
        .inspect(|_| considered += 1)
        .filter(|order| {
            let name = if matcher.needle.is_some() {
                resolve_name(&order.customer_id)
            } else {
                None
            };
            matcher.matches(order, name)
        })
        .collect();

    tracing::debug!(
        considered,
        matched = filtered.len(),
        region = %state.region,
        status = %state.status,
        search = %state.search.trim(),
        "Filtered orders"
    );

    filtered
}

// Per-run view of a FilterState with the search needle prepared once.
struct Matcher<'s> {
    state: &'s FilterState,
    needle: Option<String>,
}

impl<'s> Matcher<'s> {
    fn new(state: &'s FilterState) -> Self {
        let trimmed = state.search.trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self { state, needle }
    }

    fn matches(&self, order: &Order, customer_name: Option<&str>) -> bool {
        self.state.region.matches(order.region)
            && self.state.status.matches(order.status)
            && self.matches_search(order, customer_name)
            && self.matches_date(order)
    }

    fn matches_search(&self, order: &Order, customer_name: Option<&str>) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(order.id.as_str())
            || contains(&order.product)
            || customer_name.is_some_and(contains)
            || contains(order.status.as_str())
    }

    fn matches_date(&self, order: &Order) -> bool {
        let range = &self.state.date_range;
        !range.is_active() || range.contains(order.created_date())
    }
}
