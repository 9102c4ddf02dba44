//! Compares the week days with the ones of the `time` crate.

use visit_rules::date;
use visit_rules::time::{Date, Month, WeekDay, Year};

use pretty_assertions::assert_eq;

fn expected_week_day(date: Date) -> WeekDay {
    let month = time::Month::try_from(date.month().as_usize() as u8).unwrap();
    let expected = time::Date::from_calendar_date(
        date.year().as_usize() as i32,
        month,
        date.day() as u8,
    )
    .unwrap();

    WeekDay::try_from(expected.weekday().number_from_monday() as usize).unwrap()
}

#[test]
fn test_week_day_matches_time_crate() {
    for year in (1900..=2100).map(Year::new) {
        for month in Month::months() {
            for day in 1..=year.number_of_days_in_month(month) {
                let date = Date::new(year, month, day).unwrap();

                assert_eq!(date.week_day(), expected_week_day(date), "week day of {}", date);
            }
        }
    }
}

#[test]
fn test_ancient_dates() {
    for date in [date!(0001:01:01), date!(0400:02:29), date!(1582:10:15)] {
        assert_eq!(date.week_day(), expected_week_day(date), "week day of {}", date);
    }
}
