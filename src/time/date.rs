use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

/// Creates a [`Date`] from a literal, the date is validated at compile time.
///
/// ```
/// # use visit_rules::date;
/// # use visit_rules::time::WeekDay;
/// assert_eq!(date!(2024:01:07).week_day(), WeekDay::Sunday);
/// ```
#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day)
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Used by the [`date!`] macro, which checks the day at compile time.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    #[must_use]
    pub const fn is_sunday(&self) -> bool {
        self.week_day().is_eq(&WeekDay::Sunday)
    }

    /// The day of the year, starting with 1 for the first of january.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.year().days_before(self.month()) + self.day()
    }

    /// Returns the date `days` days after `self`.
    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() + days;
        let mut year = self.year();

        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        let mut month = Month::January;
        while ordinal > year.number_of_days_in_month(month) {
            ordinal -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self {
            year,
            month,
            day: ordinal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidDate::ParseDateError {
            input: string.to_string(),
        };

        let parse_number = |part: &str, digits: usize| {
            if part.len() != digits || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(parse_error());
            }

            part.parse::<usize>().map_err(|_| parse_error())
        };

        let [Some(year), Some(month), Some(day)] = string.trim().split_exact::<3>("-") else {
            return Err(parse_error());
        };

        let year = Year::new(parse_number(year, 4)?);
        let month = Month::try_from(parse_number(month, 2)?).map_err(|_| parse_error())?;
        let day = parse_number(day, 2)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}
