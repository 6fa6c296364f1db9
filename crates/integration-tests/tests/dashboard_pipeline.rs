//! Integration tests for the filter engine and aggregator over generated data.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use orderdesk_admin::{
    data::Snapshot,
    error::AppError,
    services::{CustomerIndex, DashboardStats, FilterState, RegionStats, StatusFilter, filter_orders},
};
use orderdesk_core::{Currency, DateRange, Order, OrderStatus, Region};
use orderdesk_integration_tests::TestContext;

/// Filters exercised by the property tests.
fn sample_filters() -> Vec<FilterState> {
    vec![
        FilterState::default(),
        FilterState {
            region: Region::Apac.into(),
            ..FilterState::default()
        },
        FilterState {
            status: OrderStatus::Delivered.into(),
            ..FilterState::default()
        },
        FilterState {
            search: "sofa".to_string(),
            ..FilterState::default()
        },
        FilterState {
            region: Region::Us.into(),
            status: StatusFilter::All,
            search: "a".to_string(),
            date_range: DateRange::parse(Some("2024-01-01"), None).unwrap(),
        },
    ]
}

fn run<'a>(ctx: &'a TestContext, orders: &[&'a Order], state: &FilterState) -> Vec<&'a Order> {
    let snapshot = ctx.snapshot();
    let index = CustomerIndex::build(&snapshot.customers, &snapshot.orders);
    filter_orders(orders.iter().copied(), state, |id| index.customer_name(id))
}

fn all_orders(snapshot: &Snapshot) -> Vec<&Order> {
    snapshot.orders.iter().collect()
}

// ============================================================================
// Filter engine
// ============================================================================

#[test]
fn test_default_filter_returns_everything() {
    let ctx = TestContext::new(11);
    let all = all_orders(ctx.snapshot());

    assert_eq!(run(&ctx, &all, &FilterState::default()), all);
}

#[test]
fn test_filter_output_is_ordered_subsequence() {
    let ctx = TestContext::new(12);
    let all = all_orders(ctx.snapshot());

    for state in sample_filters() {
        let filtered = run(&ctx, &all, &state);
        let mut remaining = all.iter();
        for order in &filtered {
            assert!(
                remaining.any(|candidate| std::ptr::eq(*candidate, *order)),
                "order {} out of sequence for {state:?}",
                order.id
            );
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    let ctx = TestContext::new(13);
    let all = all_orders(ctx.snapshot());

    for state in sample_filters() {
        let once = run(&ctx, &all, &state);
        let twice = run(&ctx, &once, &state);
        assert_eq!(once, twice, "not idempotent for {state:?}");
    }
}

#[test]
fn test_region_and_status_filters_are_exact() {
    let ctx = TestContext::new(14);
    let all = all_orders(ctx.snapshot());

    for region in Region::ALL {
        let state = FilterState {
            region: region.into(),
            ..FilterState::default()
        };
        let filtered = run(&ctx, &all, &state);
        let expected = all.iter().filter(|o| o.region == region).count();
        assert_eq!(filtered.len(), expected);
    }

    for status in OrderStatus::ALL {
        let state = FilterState {
            status: status.into(),
            ..FilterState::default()
        };
        assert!(run(&ctx, &all, &state).iter().all(|o| o.status == status));
    }
}

#[test]
fn test_id_substring_search() {
    let ctx = TestContext::new(15);
    let all = all_orders(ctx.snapshot());
    let target = all.get(7).unwrap();
    // Spans the first hyphen of the UUID, which no name, product or status contains.
    let needle = target.id.as_str().get(4..13).unwrap().to_uppercase();

    let state = FilterState {
        search: needle.clone(),
        ..FilterState::default()
    };
    let filtered = run(&ctx, &all, &state);

    assert!(filtered.iter().any(|o| o.id == target.id));
    let lowered = needle.to_lowercase();
    assert!(filtered.iter().all(|o| o.id.as_str().contains(&lowered)));
}

#[test]
fn test_january_window_returns_only_january_orders() {
    let ctx = TestContext::new(16);
    let all = all_orders(ctx.snapshot());
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    let state = FilterState {
        date_range: DateRange::new(Some(start), Some(end)).unwrap(),
        ..FilterState::default()
    };
    let filtered = run(&ctx, &all, &state);

    assert!(!filtered.is_empty());
    assert!(
        filtered
            .iter()
            .all(|o| (start..=end).contains(&o.created_date()))
    );
    let expected = all
        .iter()
        .filter(|o| (start..=end).contains(&o.created_date()))
        .count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn test_invalid_range_leaves_results_unchanged() {
    let ctx = TestContext::new(17);
    let index = ctx.state.customer_index();
    let mut session = ctx.state.session();

    session.set_region(Region::Uk);
    let before: Vec<&Order> = session.filtered(ctx.snapshot(), &index);

    let err = session
        .set_date_range(
            NaiveDate::from_ymd_opt(2024, 2, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange(_)));

    let after = session.filtered(ctx.snapshot(), &index);
    assert_eq!(before, after);
    assert!(!session.filters().date_range.is_active());
}

// ============================================================================
// Aggregator
// ============================================================================

#[test]
fn test_aggregate_counts_match_input() {
    let ctx = TestContext::new(21);
    let all = all_orders(ctx.snapshot());

    for state in sample_filters() {
        let filtered = run(&ctx, &all, &state);
        let stats = DashboardStats::aggregate(filtered.iter().copied());

        assert_eq!(stats.total_orders, filtered.len());
        assert_eq!(
            stats.region_stats.iter().map(|r| r.total_orders).sum::<usize>(),
            stats.total_orders
        );
        assert_eq!(
            stats.delivered_count,
            filtered
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
                .count()
        );
    }
}

#[test]
fn test_generated_region_stats_use_region_currency() {
    let ctx = TestContext::new(22);
    let stats = ctx.state.stats();

    assert_eq!(stats.total_orders, 150);
    assert_eq!(stats.region_stats.len(), 3);
    for region in &stats.region_stats {
        assert_eq!(region.currency, region.region.currency());
        assert_eq!(region.total_orders, 50);
    }
}

#[test]
fn test_aggregate_empty() {
    let stats = DashboardStats::aggregate(std::iter::empty());

    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.delivered_count, 0);
    assert_eq!(stats.processing_count, 0);
    assert!(stats.region_stats.is_empty());
}

#[test]
fn test_mixed_currency_revenue() {
    let order = |id: &str, region: Region, status: OrderStatus, currency: Currency| Order {
        id: id.into(),
        region,
        customer_id: "CUST01".into(),
        product: "Sydney Dining Table".to_string(),
        quantity: 1,
        total_amount: Decimal::from(100),
        currency,
        status,
        created_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
    };
    let orders = vec![
        order("us-1", Region::Us, OrderStatus::Delivered, Currency::USD),
        order("uk-1", Region::Uk, OrderStatus::Pending, Currency::GBP),
    ];

    let stats = DashboardStats::from_orders(&orders);

    assert_eq!(stats.total_revenue, Decimal::from(227));
    assert_eq!(stats.delivered_count, 1);
    assert_eq!(
        stats.region_stats,
        vec![
            RegionStats {
                region: Region::Us,
                total_orders: 1,
                total_revenue: Decimal::from(100),
                currency: Currency::USD,
            },
            RegionStats {
                region: Region::Uk,
                total_orders: 1,
                total_revenue: Decimal::from(100),
                currency: Currency::GBP,
            },
        ]
    );

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["regionStats"][1]["region"], "UK");
}

// ============================================================================
// Generator
// ============================================================================

#[test]
fn test_same_seed_same_snapshot() {
    let a = TestContext::new(99);
    let b = TestContext::new(99);
    let c = TestContext::new(100);

    assert_eq!(a.snapshot(), b.snapshot());
    assert_ne!(a.snapshot(), c.snapshot());
}
