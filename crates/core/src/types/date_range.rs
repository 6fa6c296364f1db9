//! Inclusive calendar-date range used to filter orders.

use chrono::NaiveDate;
use serde::Serialize;

/// Errors that can occur when building a [`DateRange`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Both bounds are set and the start is later than the end.
    #[error("Start date cannot be after end date")]
    StartAfterEnd {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day, earlier than `start`.
        end: NaiveDate,
    },
    /// A bound is not a valid `YYYY-MM-DD` date.
    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input, as given.
        value: String,
    },
}

/// An optional start and end date, both inclusive.
///
/// A range with neither bound set is inactive and matches every date.
///
/// ## Examples
///
/// ```
/// use orderdesk_core::DateRange;
///
/// let january = DateRange::parse(Some("2024-01-01"), Some("2024-01-31")).unwrap();
/// assert!(january.is_active());
///
/// // Start after end is rejected rather than swapped.
/// assert!(DateRange::parse(Some("2024-02-01"), Some("2024-01-01")).is_err());
///
/// // Empty strings mean "no bound".
/// assert!(!DateRange::parse(Some(""), None).unwrap().is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl DateRange {
    /// Date format accepted by [`DateRange::parse`].
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Build a range from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::StartAfterEnd`] if both bounds are set and
    /// `start > end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(DateRangeError::StartAfterEnd { start, end });
        }
        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }

    /// Parse a range from ISO `YYYY-MM-DD` strings. Empty or whitespace-only
    /// strings are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::InvalidDate`] for malformed dates and
    /// [`DateRangeError::StartAfterEnd`] for inverted ranges.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DateRangeError> {
        Self::new(parse_bound(start)?, parse_bound(end)?)
    }

    /// A range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start_date: None,
            end_date: None,
        }
    }

    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Whether either bound is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    /// Whether `date` falls inside the range (bounds inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

fn parse_bound(value: Option<&str>) -> Result<Option<NaiveDate>, DateRangeError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DateRange::FORMAT)
            .map(Some)
            .map_err(|_| DateRangeError::InvalidDate {
                value: s.to_owned(),
            }),
    }
}
