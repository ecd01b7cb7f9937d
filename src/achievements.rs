use crate::badge::Badge;
use crate::day::{date_key, today_utc, ActivityDateSet};
use crate::errors::AppError;
use crate::models::{AchievementsReport, ActivityKind, ActivityReport};
use crate::records::{check_new_record, BestStreakStore};
use crate::source::ActivitySource;
use crate::streak::compute_streaks;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

pub fn build_report<A, S>(source: &A, store: &mut S) -> Result<AchievementsReport, AppError>
where
    A: ActivitySource + ?Sized,
    S: BestStreakStore + ?Sized,
{
    build_report_at(Utc::now(), source, store)
}

/// Computes streaks, badges and record notices for every activity type as of `now`.
pub fn build_report_at<A, S>(
    now: DateTime<Utc>,
    source: &A,
    store: &mut S,
) -> Result<AchievementsReport, AppError>
where
    A: ActivitySource + ?Sized,
    S: BestStreakStore + ?Sized,
{
    let today = today_utc(now);
    let mut activities = Vec::with_capacity(ActivityKind::ALL.len());
    let mut best = BTreeMap::new();

    for kind in ActivityKind::ALL {
        let raw = source
            .activity_dates(kind)
            .map_err(|source| AppError::Source { kind, source })?;
        let days = ActivityDateSet::from_raw(&raw)
            .map_err(|source| AppError::Streak { kind, source })?;
        let streaks = compute_streaks(&days, today);
        debug!(
            %kind,
            entries = raw.len(),
            days = days.len(),
            current = streaks.current_streak,
            longest = streaks.longest_streak,
            "computed streaks"
        );

        let new_record = check_new_record(store, kind, streaks.longest_streak);
        let key = kind.record_key();
        if let Some(value) = store.get(&key) {
            best.insert(key, value);
        }

        let badge = Badge::for_longest(streaks.longest_streak);
        activities.push(ActivityReport {
            kind,
            current_streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            badge,
            badge_label: badge.label().to_string(),
            badge_emoji: badge.emoji().to_string(),
            new_record,
        });
    }

    Ok(AchievementsReport {
        today: date_key(today),
        activities,
        best,
    })
}
