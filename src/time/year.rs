use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
pub struct Year(usize);

impl Year {
    /// The proleptic gregorian date 0000-01-01 is the base date, dates before it
    /// can not be represented.
    const BASE_DATE: (Self, WeekDay) = (Self(0), WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    #[must_use]
    pub const fn is_common_year(&self) -> bool {
        !self.is_leap_year()
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days in this year that come before the first day of `month`.
    #[must_use]
    pub(super) const fn days_before(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = Month::January;

        while !current.is_eq(&month) {
            result += self.number_of_days_in_month(current);
            current = current.next();
        }

        result
    }

    /// Number of days between 0000-01-01 and the first day of this year.
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.0;
        // year 0 is a leap year, so the leap years in 0..year are
        // ceil(year / 4) - ceil(year / 100) + ceil(year / 400)
        let leap_years = (year + 3) / 4 - (year + 99) / 100 + (year + 399) / 400;

        year * 365 + leap_years
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (_, week_day_ref) = Self::BASE_DATE;
        let days = self.days_since_base_date() + self.days_before(month) + (day - 1);

        week_day_ref.add_const(days)
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
