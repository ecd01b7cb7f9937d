use crate::day::{today_utc, ActivityDateSet};
use crate::errors::StreakError;
use crate::models::StreakResult;
use chrono::{DateTime, NaiveDate, Utc};

/// Computes current and longest streaks for one activity as of `today`.
///
/// The current streak only counts if the most recent active day is `today`;
/// activity that stopped yesterday yields a current streak of zero.
pub fn compute_streaks(days: &ActivityDateSet, today: NaiveDate) -> StreakResult {
    if days.is_empty() {
        return StreakResult::default();
    }

    StreakResult {
        current_streak: current_streak(days, today),
        longest_streak: longest_streak(days),
    }
}

/// Normalizes raw date strings and computes streaks as of `now`.
pub fn compute_streaks_from_raw<I, S>(
    raw: I,
    now: DateTime<Utc>,
) -> Result<StreakResult, StreakError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let days = ActivityDateSet::from_raw(raw)?;
    Ok(compute_streaks(&days, today_utc(now)))
}

fn longest_streak(days: &ActivityDateSet) -> u32 {
    let mut ordered = days.iter();
    let Some(mut previous) = ordered.next() else {
        return 0;
    };

    let mut longest = 1u32;
    let mut running = 1u32;
    for day in ordered {
        match (day - previous).num_days() {
            0 => continue,
            1 => running = running.saturating_add(1),
            _ => {
                longest = longest.max(running);
                running = 1;
            }
        }
        previous = day;
    }

    longest.max(running)
}

fn current_streak(days: &ActivityDateSet, today: NaiveDate) -> u32 {
    if days.last() != Some(today) {
        return 0;
    }

    let mut count = 0u32;
    let mut cursor = Some(today);
    while let Some(day) = cursor.filter(|day| days.contains(*day)) {
        count = count.saturating_add(1);
        cursor = day.pred_opt();
    }
    count
}
