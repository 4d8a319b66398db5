// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar dates that never lie in the future.

use crate::error::DomainError;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// `YYYY-MM-DD`, the only textual form a `Date` is read from or written as.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A calendar date that is at most today.
///
/// Ordering follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    value: time::Date,
}

impl Date {
    /// Returns the current UTC day.
    #[must_use]
    pub fn today() -> time::Date {
        OffsetDateTime::now_utc().date()
    }

    /// Creates a new `Date`, checked against the current day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateInFuture` if the date is after today.
    pub fn new(value: time::Date) -> Result<Self, DomainError> {
        Self::new_as_of(value, Self::today())
    }

    /// Creates a new `Date`, checked against an explicit reference day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateInFuture` if the date is after `today`.
    pub fn new_as_of(value: time::Date, today: time::Date) -> Result<Self, DomainError> {
        if value > today {
            return Err(DomainError::DateInFuture { date: value, today });
        }
        Ok(Self { value })
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateWrongFormat` if the text is not exactly
    /// `YYYY-MM-DD` or names a day that does not exist, and
    /// `DomainError::DateInFuture` if the day is after today.
    pub fn parse_date(text: &str) -> Result<Self, DomainError> {
        Self::parse_date_as_of(text, Self::today())
    }

    /// Parses a `YYYY-MM-DD` string, checked against an explicit reference day.
    ///
    /// # Errors
    ///
    /// See [`Date::parse_date`].
    pub fn parse_date_as_of(text: &str, today: time::Date) -> Result<Self, DomainError> {
        let wrong_format = || DomainError::DateWrongFormat {
            input: text.to_string(),
        };
        // `[year]` also accepts a leading sign
        if !text.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(wrong_format());
        }
        let value: time::Date = time::Date::parse(text, ISO_DATE).map_err(|_| wrong_format())?;
        Self::new_as_of(value, today)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn value(&self) -> time::Date {
        self.value
    }

    /// Returns the whole years elapsed from this date until `later`.
    ///
    /// A year only counts once its anniversary has been reached. Returns 0
    /// if `later` is before this date.
    #[must_use]
    pub fn years_until(&self, later: time::Date) -> i32 {
        if later < self.value {
            return 0;
        }
        let mut years: i32 = later.year() - self.value.year();
        let anniversary_reached: bool = (u8::from(later.month()), later.day())
            >= (u8::from(self.value.month()), self.value.day());
        if !anniversary_reached {
            years -= 1;
        }
        years
    }

    /// Returns the whole years elapsed from this date until today.
    #[must_use]
    pub fn years_to_today(&self) -> i32 {
        self.years_until(Self::today())
    }

    /// Returns the number of days from `earlier` to this date.
    ///
    /// Negative if `earlier` is actually later.
    #[must_use]
    pub fn days_elapsed(&self, earlier: &Self) -> i64 {
        (self.value - earlier.value).whole_days()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .value
            .format(ISO_DATE)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}
