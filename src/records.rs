use crate::models::{ActivityKind, NewRecord};
use std::collections::BTreeMap;
use tracing::info;

const RECORD_TITLE: &str = "New Streak Record! 🎉";

/// Key-value store holding the best longest streak seen per activity.
pub trait BestStreakStore {
    fn get(&self, key: &str) -> Option<u32>;
    fn set(&mut self, key: &str, value: u32);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, u32>,
}

impl MemoryStore {
    pub fn new(values: BTreeMap<String, u32>) -> Self {
        Self { values }
    }

    pub fn into_inner(self) -> BTreeMap<String, u32> {
        self.values
    }
}

impl BestStreakStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
    }
}

/// Records `longest` as the new best for `kind` when it beats the stored value.
///
/// A zero streak never counts as a record and leaves the store untouched.
pub fn check_new_record<S>(store: &mut S, kind: ActivityKind, longest: u32) -> Option<NewRecord>
where
    S: BestStreakStore + ?Sized,
{
    if longest == 0 {
        return None;
    }

    let key = kind.record_key();
    let previous_best = store.get(&key).unwrap_or(0);
    if longest <= previous_best {
        return None;
    }

    store.set(&key, longest);
    info!(%kind, previous_best, longest, "new streak record");

    Some(NewRecord {
        kind,
        previous_best,
        longest,
        title: RECORD_TITLE.to_string(),
        message: format!("{} streak: {longest} days", kind.display_name()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_streak_is_a_record() {
        let mut store = MemoryStore::default();
        let record = check_new_record(&mut store, ActivityKind::Journal, 3).expect("record");

        assert_eq!(record.previous_best, 0);
        assert_eq!(record.longest, 3);
        assert_eq!(record.title, "New Streak Record! 🎉");
        assert_eq!(record.message, "Journal streak: 3 days");
        assert_eq!(store.get("best_journal_streak"), Some(3));
    }

    #[test]
    fn equal_or_lower_streaks_are_not_records() {
        let mut store = MemoryStore::new(BTreeMap::from([("best_mood_streak".to_string(), 5)]));

        assert_eq!(check_new_record(&mut store, ActivityKind::Mood, 5), None);
        assert_eq!(check_new_record(&mut store, ActivityKind::Mood, 2), None);
        assert_eq!(store.get("best_mood_streak"), Some(5));

        let record = check_new_record(&mut store, ActivityKind::Mood, 6).expect("record");
        assert_eq!(record.previous_best, 5);
        assert_eq!(store.get("best_mood_streak"), Some(6));
    }

    #[test]
    fn zero_streak_leaves_store_untouched() {
        let mut store = MemoryStore::default();
        assert_eq!(check_new_record(&mut store, ActivityKind::Meditation, 0), None);
        assert!(store.into_inner().is_empty());
    }

    #[test]
    fn activities_are_tracked_independently() {
        let mut store = MemoryStore::default();
        check_new_record(&mut store, ActivityKind::Journal, 4);
        let record = check_new_record(&mut store, ActivityKind::Meditation, 2).expect("record");

        assert_eq!(record.message, "Meditation streak: 2 days");
        assert_eq!(
            store.into_inner(),
            BTreeMap::from([
                ("best_journal_streak".to_string(), 4),
                ("best_meditation_streak".to_string(), 2),
            ])
        );
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut store = MemoryStore::default();
        let dyn_store: &mut dyn BestStreakStore = &mut store;
        assert!(check_new_record(dyn_store, ActivityKind::Mood, 1).is_some());
        assert_eq!(store.get("best_mood_streak"), Some(1));
    }
}
