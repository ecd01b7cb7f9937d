use crate::badge::Badge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Journal,
    Mood,
    Meditation,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [Self::Journal, Self::Mood, Self::Meditation];

    pub fn key(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Mood => "mood",
            Self::Meditation => "meditation",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Mood => "Mood",
            Self::Meditation => "Meditation",
        }
    }

    /// Key under which the best longest streak for this activity is stored.
    pub fn record_key(self) -> String {
        format!("best_{}_streak", self.key())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Streak lengths in days. `longest_streak >= current_streak` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub kind: ActivityKind,
    pub previous_best: u32,
    pub longest: u32,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub kind: ActivityKind,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub badge: Badge,
    pub badge_label: String,
    pub badge_emoji: String,
    pub new_record: Option<NewRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsReport {
    pub today: String,
    pub activities: Vec<ActivityReport>,
    pub best: BTreeMap<String, u32>,
}

/// Raw activity history for one user, one list of date strings per activity type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Snapshot {
    pub journal: Vec<String>,
    pub mood: Vec<String>,
    pub meditation: Vec<String>,
    pub best: BTreeMap<String, u32>,
}

impl Snapshot {
    pub fn dates(&self, kind: ActivityKind) -> &[String] {
        match kind {
            ActivityKind::Journal => &self.journal,
            ActivityKind::Mood => &self.mood,
            ActivityKind::Meditation => &self.meditation,
        }
    }
}
