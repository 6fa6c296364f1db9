//! Customer generation.

use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom};

use orderdesk_core::{Customer, CustomerId, Region};

use crate::config::MAX_PER_REGION;

const CUSTOMER_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CUSTOMER_ID_LEN: usize = 6;

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Jack", "Charlotte", "Noah", "Amelia", "William", "Isla", "Oliver", "Mia", "Henry",
    "Grace", "Lucas", "Chloe", "James", "Ava", "Thomas", "Ruby", "Samuel", "Zoe", "Leo",
    "Harper", "Ethan", "Matilda", "Daniel",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Nguyen", "Johnson", "Martin",
    "White", "Anderson", "Walker", "Thompson", "Harris", "Lee", "Ryan", "Robinson", "Kelly",
    "King", "Davies", "Evans", "Clarke", "Patel", "Garcia",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "mail.test", "inbox.test"];

/// Generate `per_region` customers for each region.
///
/// Customer IDs are unique within the returned batch. The result is sorted
/// by region code, then by name.
pub fn generate_customers<R: Rng + ?Sized>(rng: &mut R, per_region: usize) -> Vec<Customer> {
    let capacity = per_region
        .saturating_mul(Region::ALL.len())
        .min(MAX_PER_REGION * Region::ALL.len());
    let mut seen_ids = HashSet::with_capacity(capacity);
    let mut customers = Vec::with_capacity(capacity);

    for region in Region::ALL {
        for _ in 0..per_region {
            let customer_id = unique_customer_id(rng, &mut seen_ids);
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let email = format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                rng.random_range(1..100),
                pick(rng, EMAIL_DOMAINS),
            );

            customers.push(Customer {
                customer_id,
                name: format!("{first} {last}"),
                email,
                phone: phone_number(rng, region),
                region,
            });
        }
    }

    customers.sort_by(|a, b| a.region.cmp(&b.region).then_with(|| a.name.cmp(&b.name)));
    customers
}

fn unique_customer_id<R: Rng + ?Sized>(rng: &mut R, seen: &mut HashSet<String>) -> CustomerId {
    loop {
        let id: String = (0..CUSTOMER_ID_LEN)
            .filter_map(|_| CUSTOMER_ID_ALPHABET.choose(rng).map(|&b| char::from(b)))
            .collect();
        if seen.insert(id.clone()) {
            return CustomerId::new(id);
        }
    }
}

fn phone_number<R: Rng + ?Sized>(rng: &mut R, region: Region) -> String {
    match region {
        Region::Apac => format!(
            "+61 4{:02} {:03} {:03}",
            rng.random_range(0..100),
            rng.random_range(0..1000),
            rng.random_range(0..1000)
        ),
        Region::Uk => format!(
            "+44 7{:03} {:06}",
            rng.random_range(0..1000),
            rng.random_range(0..1_000_000)
        ),
        Region::Us => format!(
            "+1 ({:03}) {:03}-{:04}",
            rng.random_range(200..1000),
            rng.random_range(200..1000),
            rng.random_range(0..10_000)
        ),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
