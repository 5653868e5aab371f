//! Age derivation from birth dates.

use chrono::{Datelike, Local, NaiveDate};

/// Completed years between `birth_date` and `on`.
///
/// The year difference drops by one when `on` falls before the birthday
/// within the year, compared as a `(month, day)` pair; this also covers
/// Feb 29 births in non-leap years. A `birth_date` in the future yields
/// zero or a negative value rather than panicking.
pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Completed years as of today on the local calendar.
pub fn calculate_age(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Local::now().date_naive())
}
