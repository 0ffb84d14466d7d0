use chrono::{DateTime, Utc};

use crate::percent;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GamerProfile {
    pub username: String,
    pub avatar: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub member_since: String,
    /// Whole hours.
    pub total_play_hours: u64,
    pub games_played: u32,
    pub achievements: u32,
    pub total_achievements: u32,
    pub rank: String,
    pub rank_icon: String,
    /// Consecutive days played.
    pub streak: u32,
    pub favorite_category: String,
}

impl GamerProfile {
    pub fn xp_progress(&self) -> f64 {
        percent(self.xp, self.xp_to_next)
    }

    pub fn achievement_progress(&self) -> f64 {
        percent(
            u64::from(self.achievements),
            u64::from(self.total_achievements),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Play,
    Achievement,
    Highscore,
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentActivity {
    pub id: String,
    pub kind: ActivityKind,
    pub game: Option<String>,
    pub detail: String,
    pub at: DateTime<Utc>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub game: String,
    pub thumbnail: String,
    pub play_hours: u64,
    pub high_score: u64,
    pub achievements: u32,
    pub total_achievements: u32,
    pub last_played: DateTime<Utc>,
}

impl GameStats {
    pub fn achievement_progress(&self) -> f64 {
        percent(
            u64::from(self.achievements),
            u64::from(self.total_achievements),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub earned: bool,
}
