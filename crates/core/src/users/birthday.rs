//! Birthday distance calculation.
//!
//! Pure functions over a date of birth and a [`Clock`]. Birthdays are
//! compared against the clock's wall-clock time; there is no timezone.
//!
//! # Leap day birthdays
//!
//! A Feb 29 birthday is observed on Mar 1 in non-leap years.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

use super::{Clock, User};

/// Returns the date on which a birthday falls in the given year.
///
/// # Examples
///
/// ```
/// use birthdays_core::users::observed_birthday;
/// use chrono::NaiveDate;
///
/// let leap_day = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
/// assert_eq!(
///     observed_birthday(leap_day, 2023),
///     NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
/// );
/// assert_eq!(
///     observed_birthday(leap_day, 2024),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// ```
pub fn observed_birthday(date_of_birth: NaiveDate, year: i32) -> NaiveDate {
    date_of_birth
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        // Only reachable for years chrono cannot represent.
        .unwrap_or_default()
}

/// Returns the number of days until the next birthday, or 0 if it is today.
///
/// Partial days round up: at noon the day before a birthday, the result is 1.
pub fn days_until_birthday<C: Clock + ?Sized>(date_of_birth: NaiveDate, clock: &C) -> i64 {
    let now = clock.now();
    let today = now.date();

    let this_year = observed_birthday(date_of_birth, today.year());
    if this_year == today {
        return 0;
    }

    let next = if this_year > today {
        this_year
    } else {
        observed_birthday(date_of_birth, today.year() + 1)
    };

    ceil_days(next.and_time(NaiveTime::MIN) - now)
}

/// Builds the greeting returned to the user.
pub fn birthday_message<C: Clock + ?Sized>(user: &User, clock: &C) -> String {
    match days_until_birthday(user.date_of_birth, clock) {
        0 => format!("Hello, {}! Happy birthday!", user.username),
        days => format!(
            "Hello, {}! Your birthday is in {} day(s)",
            user.username, days
        ),
    }
}

/// Whole days in `delta`, rounded up. Any remainder counts, down to the nanosecond.
fn ceil_days(delta: TimeDelta) -> i64 {
    let whole = delta.num_days();
    if delta > TimeDelta::days(whole) {
        whole + 1
    } else {
        whole
    }
}
