//! Type-safe price representation using decimal arithmetic.
//!
//! Conversion to USD uses a fixed rate table rather than live rates so that
//! dashboard totals are reproducible.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// The amount converted to USD with the fixed rate table.
    ///
    /// ```
    /// use orderdesk_core::{Currency, Price};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Price::new(Decimal::from(100), Currency::GBP);
    /// assert_eq!(price.to_usd(), Decimal::from(127));
    /// ```
    #[must_use]
    pub fn to_usd(&self) -> Decimal {
        self.amount * self.currency.usd_rate()
    }

    /// Format for display in whole units, e.g. `£12,700`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().trunc().to_string();
        format!(
            "{sign}{}{}",
            self.currency.symbol(),
            group_thousands(&digits)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display())
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    AUD,
    GBP,
    #[default]
    USD,
}

impl Currency {
    /// USD value of one unit of this currency.
    ///
    /// Approximate, static rates: USD=1.00, GBP=1.27, AUD=0.67.
    #[must_use]
    pub fn usd_rate(self) -> Decimal {
        match self {
            Self::USD => Decimal::ONE,
            Self::GBP => Decimal::new(127, 2),
            Self::AUD => Decimal::new(67, 2),
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AUD => "AUD",
            Self::GBP => "GBP",
            Self::USD => "USD",
        }
    }

    /// Symbol as rendered by an `en-US` currency formatter.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::AUD => "A$",
            Self::GBP => "£",
            Self::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUD" => Ok(Self::AUD),
            "GBP" => Ok(Self::GBP),
            "USD" => Ok(Self::USD),
            _ => Err(ParseEnumError::new("currency", s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_rates() {
        assert_eq!(Currency::USD.usd_rate(), Decimal::ONE);
        assert_eq!(Currency::GBP.usd_rate(), Decimal::new(127, 2));
        assert_eq!(Currency::AUD.usd_rate(), Decimal::new(67, 2));
    }

    #[test]
    fn test_to_usd_aud() {
        let price = Price::new(Decimal::from(1000), Currency::AUD);
        assert_eq!(price.to_usd(), Decimal::from(670));
    }

    #[test]
    fn test_display_groups_thousands() {
        let price = Price::new(Decimal::from(1_234_567), Currency::USD);
        assert_eq!(price.display(), "$1,234,567");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::new(Decimal::ZERO, Currency::GBP).display(), "£0");
        assert_eq!(
            Price::new(Decimal::from(999), Currency::AUD).display(),
            "A$999"
        );
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::new(Decimal::new(25005, 1), Currency::USD);
        assert_eq!(price.display(), "$2,501");

        let price = Price::new(Decimal::new(12344, 1), Currency::USD);
        assert_eq!(price.display(), "$1,234");
    }

    #[test]
    fn test_display_negative() {
        let price = Price::new(Decimal::from(-1500), Currency::USD);
        assert_eq!(price.display(), "-$1,500");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::GBP);
        assert!("EUR".parse::<Currency>().is_err());
    }
}
