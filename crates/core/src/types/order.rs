//! Order record.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Currency, CustomerId, OrderId, OrderStatus, Price, Region};

/// An order placed by a customer.
///
/// `currency` is derived from `region` when an order is created but is not
/// re-checked afterwards. `customer_id` may reference a customer that does
/// not exist in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub region: Region,
    pub customer_id: CustomerId,
    /// Product name, free text.
    pub product: String,
    pub quantity: u32,
    /// Order total in `currency`.
    pub total_amount: Decimal,
    pub currency: Currency,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// The order total as a [`Price`].
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::new(self.total_amount, self.currency)
    }

    /// Calendar date (UTC) the order was created on.
    #[must_use]
    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> Order {
        Order {
            id: OrderId::new("a1b2"),
            region: Region::Uk,
            customer_id: CustomerId::new("CUST01"),
            product: "Milano Sofa".to_string(),
            quantity: 2,
            total_amount: Decimal::from(4200),
            currency: Currency::GBP,
            status: OrderStatus::Shipped,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap(),
        }
    }

    #[test]
    fn test_created_date_uses_utc_calendar_day() {
        let order = sample();
        assert_eq!(
            order.created_date(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_price() {
        let price = sample().price();
        assert_eq!(price.currency, Currency::GBP);
        assert_eq!(price.to_usd(), Decimal::from(5334));
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["customerId"], "CUST01");
        assert_eq!(json["totalAmount"], "4200");
        assert_eq!(json["region"], "UK");
        assert_eq!(json["status"], "Shipped");
    }
}
