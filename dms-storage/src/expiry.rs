//! Storage expiration dates
//!
//! Stored items must be collected by the first Sunday of the month. Once
//! that Sunday has started, the deadline moves to the next month's first
//! Sunday.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

const SUBMIT_FORMAT: &str = "%Y-%m-%d %H:%M";
const EXPIRE_FORMAT: &str = "%B %-d";

/// Submission time and expiration date, formatted for printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampedTimes {
    /// e.g. `2017-02-20 21:52`
    pub submit_time: String,
    /// e.g. `March 5`
    pub expire_date: String,
}

impl StampedTimes {
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            submit_time: now.format(SUBMIT_FORMAT).to_string(),
            expire_date: expiration_date(now).format(EXPIRE_FORMAT).to_string(),
        }
    }
}

/// First Sunday of this month if it has not started yet, otherwise of next month
pub fn expiration_date(now: NaiveDateTime) -> NaiveDate {
    let this_month = first_of_month(now.date());
    let candidate = first_weekday(this_month, Weekday::Sun);
    if candidate.and_time(NaiveTime::MIN) < now {
        // Day 1 plus 31 days always lands in the following month
        let next_month = first_of_month(this_month + TimeDelta::days(31));
        first_weekday(next_month, Weekday::Sun)
    } else {
        candidate
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(i64::from(date.day0()))
}

fn first_weekday(first: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = weekday.num_days_from_sunday();
    let start = first.weekday().num_days_from_sunday();
    first + TimeDelta::days(i64::from((7 + target - start) % 7))
}
