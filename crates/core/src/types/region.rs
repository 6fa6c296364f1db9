//! Sales regions.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Currency, ParseEnumError};

/// Geographic region an order or customer belongs to.
///
/// Each region trades in exactly one currency, see [`Region::currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "APAC")]
    Apac,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "US")]
    Us,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Self; 3] = [Self::Apac, Self::Uk, Self::Us];

    /// Region code as shown in the dashboard (e.g. "APAC").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Apac => "APAC",
            Self::Uk => "UK",
            Self::Us => "US",
        }
    }

    /// The currency orders in this region are priced in.
    ///
    /// ```
    /// use orderdesk_core::{Currency, Region};
    ///
    /// assert_eq!(Region::Apac.currency(), Currency::AUD);
    /// assert_eq!(Region::Uk.currency(), Currency::GBP);
    /// assert_eq!(Region::Us.currency(), Currency::USD);
    /// ```
    #[must_use]
    pub const fn currency(self) -> Currency {
        match self {
            Self::Apac => Currency::AUD,
            Self::Uk => Currency::GBP,
            Self::Us => Currency::USD,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APAC" => Ok(Self::Apac),
            "UK" => Ok(Self::Uk),
            "US" => Ok(Self::Us),
            _ => Err(ParseEnumError::new("region", s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_and_lowercase() {
        assert!("EU".parse::<Region>().is_err());
        assert!("apac".parse::<Region>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Region::Apac).unwrap(), "\"APAC\"");
    }
}
