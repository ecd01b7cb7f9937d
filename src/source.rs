use crate::errors::SourceError;
use crate::models::{ActivityKind, Snapshot};

/// Supplies the raw activity dates for one activity type of the current user.
pub trait ActivitySource {
    fn activity_dates(&self, kind: ActivityKind) -> Result<Vec<String>, SourceError>;
}

impl ActivitySource for Snapshot {
    fn activity_dates(&self, kind: ActivityKind) -> Result<Vec<String>, SourceError> {
        Ok(self.dates(kind).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serves_each_activity_list() {
        let snapshot = Snapshot {
            journal: vec!["2024-06-10".to_string()],
            mood: vec!["2024-06-09".to_string(), "2024-06-10".to_string()],
            ..Snapshot::default()
        };

        assert_eq!(
            snapshot.activity_dates(ActivityKind::Journal).unwrap(),
            vec!["2024-06-10"]
        );
        assert_eq!(snapshot.activity_dates(ActivityKind::Mood).unwrap().len(), 2);
        assert!(snapshot
            .activity_dates(ActivityKind::Meditation)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn snapshot_fields_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"mood": ["2024-06-10"]}"#).unwrap();
        assert!(snapshot.journal.is_empty());
        assert_eq!(snapshot.mood, vec!["2024-06-10"]);
        assert!(snapshot.best.is_empty());
    }
}
