//! Calendar-day normalization.
//!
//! Every activity is reduced to a UTC calendar day before any streak arithmetic
//! happens. Timestamps carrying an offset are shifted to UTC first; naive
//! timestamps are taken to be UTC already.

use crate::errors::StreakError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeSet;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Resolves a date or timestamp string to its UTC calendar day.
pub fn canonical_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
}

pub fn today_utc(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Deduplicated, ascending set of days on which one activity happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDateSet {
    days: BTreeSet<NaiveDate>,
}

impl ActivityDateSet {
    /// Builds the set from raw strings. The first entry that cannot be resolved
    /// to a day fails the whole set.
    pub fn from_raw<I, S>(raw: I) -> Result<Self, StreakError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = BTreeSet::new();
        for (index, value) in raw.into_iter().enumerate() {
            let value = value.as_ref();
            let day = canonical_day(value).ok_or_else(|| StreakError::InvalidDate {
                index,
                value: value.to_string(),
            })?;
            days.insert(day);
        }
        Ok(Self { days })
    }

    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            days: days.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}
