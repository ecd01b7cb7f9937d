use serde::{Deserialize, Serialize};

/// Achievement tier earned from an activity's longest streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    None,
    Starter,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Badge {
    pub fn for_longest(longest: u32) -> Self {
        match longest {
            30.. => Self::Diamond,
            14.. => Self::Gold,
            7.. => Self::Silver,
            3.. => Self::Bronze,
            1.. => Self::Starter,
            0 => Self::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Diamond => "Diamond Discipline",
            Self::Gold => "Gold Groove",
            Self::Silver => "Silver Steady",
            Self::Bronze => "Bronze Beginning",
            Self::Starter => "Getting Started",
            Self::None => "No streak yet",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Diamond => "💎",
            Self::Gold => "🥇",
            Self::Silver => "🥈",
            Self::Bronze => "🥉",
            Self::Starter => "✨",
            Self::None => "🌱",
        }
    }
}
