use crate::day::canonical_day;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use std::{env, path::PathBuf};

pub const DATA_PATH_VAR: &str = "STREAK_DATA_PATH";
pub const TODAY_VAR: &str = "STREAK_TODAY";
const DEFAULT_DATA_PATH: &str = "data/activity.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    /// Fixed "now" for the run; the system clock is used when absent.
    pub now: Option<DateTime<Utc>>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let now = match lookup(TODAY_VAR) {
            Some(value) => Some(parse_now(&value).ok_or_else(|| {
                AppError::config(format!(
                    "{TODAY_VAR} must be a date or RFC 3339 timestamp, got {value:?}"
                ))
            })?),
            None => None,
        };

        Ok(Self { data_path, now })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

fn parse_now(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(timestamp.with_timezone(&Utc));
    }

    canonical_day(value)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
