//! Order generation.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, seq::IndexedRandom};
use rust_decimal::Decimal;

use orderdesk_core::{Customer, Order, OrderId, OrderStatus, Region};

use crate::config::MAX_PER_REGION;

/// Products the store sells.
pub const PRODUCT_CATALOGUE: &[&str] = &[
    "Milano Sofa",
    "Sydney Dining Table",
    "Melbourne Coffee Table",
    "Brisbane Armchair",
    "Perth Bookshelf",
    "Adelaide Bed Frame",
    "Darwin Wardrobe",
    "Hobart Side Table",
    "Canberra Desk",
    "Gold Coast Ottoman",
];

const MIN_BASE_PRICE: u32 = 500;
const MAX_BASE_PRICE: u32 = 5000;
const MAX_QUANTITY: u32 = 5;
const SECONDS_PER_DAY: i64 = 86_400;

/// Generate `per_region` orders for every region that has customers.
///
/// Each order belongs to a random customer of its region and is priced in
/// that region's currency. `created_at` falls within the `history_days`
/// before `now`. The result is sorted newest first.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &[Customer],
    per_region: usize,
    now: DateTime<Utc>,
    history_days: u32,
) -> Vec<Order> {
    let mut by_region: HashMap<Region, Vec<&Customer>> = HashMap::new();
    for customer in customers {
        by_region.entry(customer.region).or_default().push(customer);
    }

    let window_secs = i64::from(history_days.max(1)) * SECONDS_PER_DAY;
    let capacity = per_region
        .saturating_mul(by_region.len())
        .min(MAX_PER_REGION * Region::ALL.len());
    let mut orders = Vec::with_capacity(capacity);

    for region in Region::ALL {
        let Some(region_customers) = by_region.get(&region) else {
            continue;
        };

        for _ in 0..per_region {
            let Some(customer) = region_customers.choose(rng) else {
                break;
            };
            let base_price = rng.random_range(MIN_BASE_PRICE..=MAX_BASE_PRICE);
            let quantity = rng.random_range(1..=MAX_QUANTITY);
            let age = TimeDelta::seconds(rng.random_range(0..window_secs));

            orders.push(Order {
                id: OrderId::new(random_uuid(rng).to_string()),
                region,
                customer_id: customer.customer_id.clone(),
                product: PRODUCT_CATALOGUE
                    .choose(rng)
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                quantity,
                total_amount: Decimal::from(base_price * quantity),
                currency: region.currency(),
                status: OrderStatus::ALL
                    .choose(rng)
                    .copied()
                    .unwrap_or_default(),
                // Windows reaching past chrono's range clamp to its earliest instant.
                created_at: now
                    .checked_sub_signed(age)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
            });
        }
    }

    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

// Drawn from the caller's RNG so seeded snapshots are reproducible.
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> uuid::Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::data::generate_customers;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default()
    }

    #[test]
    fn test_no_customers_no_orders() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_orders(&mut rng, &[], 50, now(), 90).is_empty());
    }

    #[test]
    fn test_orders_per_region_and_currency() {
        let mut rng = StdRng::seed_from_u64(2);
        let customers = generate_customers(&mut rng, 5);
        let orders = generate_orders(&mut rng, &customers, 20, now(), 90);

        assert_eq!(orders.len(), 60);
        for region in Region::ALL {
            let in_region: Vec<_> = orders.iter().filter(|o| o.region == region).collect();
            assert_eq!(in_region.len(), 20);
            assert!(in_region.iter().all(|o| o.currency == region.currency()));
        }
    }

    #[test]
    fn test_orders_reference_customers_of_same_region() {
        let mut rng = StdRng::seed_from_u64(3);
        let customers = generate_customers(&mut rng, 4);
        let orders = generate_orders(&mut rng, &customers, 25, now(), 90);

        let regions: HashMap<_, _> = customers
            .iter()
            .map(|c| (c.customer_id.clone(), c.region))
            .collect();
        for order in &orders {
            assert_eq!(regions.get(&order.customer_id), Some(&order.region));
        }
    }

    #[test]
    fn test_field_ranges() {
        let mut rng = StdRng::seed_from_u64(4);
        let customers = generate_customers(&mut rng, 3);
        let orders = generate_orders(&mut rng, &customers, 40, now(), 90);
        let oldest_allowed = now() - TimeDelta::days(90);

        for order in &orders {
            assert!((1..=MAX_QUANTITY).contains(&order.quantity));
            let min = Decimal::from(MIN_BASE_PRICE * order.quantity);
            let max = Decimal::from(MAX_BASE_PRICE * order.quantity);
            assert!(order.total_amount >= min && order.total_amount <= max);
            assert!(PRODUCT_CATALOGUE.contains(&order.product.as_str()));
            assert!(order.created_at <= now() && order.created_at > oldest_allowed);
        }
    }

    #[test]
    fn test_sorted_newest_first_with_unique_ids() {
        let mut rng = StdRng::seed_from_u64(5);
        let customers = generate_customers(&mut rng, 3);
        let orders = generate_orders(&mut rng, &customers, 30, now(), 90);

        assert!(orders.windows(2).all(|pair| match pair {
            [a, b] => a.created_at >= b.created_at,
            _ => true,
        }));
        let ids: HashSet<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn test_window_past_calendar_range_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(7);
        let customers = generate_customers(&mut rng, 2);
        let orders = generate_orders(&mut rng, &customers, 20, now(), u32::MAX);

        assert_eq!(orders.len(), 60);
        assert!(orders.iter().all(|o| o.created_at <= now()));
        assert!(orders.iter().all(|o| o.created_at >= DateTime::<Utc>::MIN_UTC));
    }

    #[test]
    fn test_only_regions_with_customers_get_orders() {
        let mut rng = StdRng::seed_from_u64(6);
        let customers: Vec<Customer> = generate_customers(&mut rng, 2)
            .into_iter()
            .filter(|c| c.region == Region::Uk)
            .collect();
        let orders = generate_orders(&mut rng, &customers, 10, now(), 90);

        assert_eq!(orders.len(), 10);
        assert!(orders.iter().all(|o| o.region == Region::Uk));
    }
}
