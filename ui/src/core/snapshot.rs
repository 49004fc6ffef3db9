//! Dashboard snapshot model. One document per page load, never mutated after decoding.

use serde::{Deserialize, Serialize};

/// Root document written by `dashboard/generate_data.py`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub overview: Overview,
    #[serde(default)]
    pub top_songs: Vec<SongPlays>,
    #[serde(default)]
    pub top_artists: Vec<ArtistPlays>,
    #[serde(default)]
    pub top_locations: Vec<LocationPlays>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub hourly_activity: Vec<HourlyPlays>,
    #[serde(default)]
    pub daily_activity: Vec<DailyPlays>,
    #[serde(default)]
    pub user_levels: Vec<LevelCount>,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_users: u64,
    pub total_songs: u64,
    pub total_artists: u64,
    pub total_songplays: u64,
    /// Emitted by newer generators; older snapshots omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_listening_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongPlays {
    pub title: String,
    pub artist: String,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistPlays {
    pub name: String,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPlays {
    pub location: String,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub time: String,
    pub user: String,
    pub song: String,
    pub artist: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyPlays {
    pub hour: u8,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlays {
    pub day: String,
    pub plays: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: String,
    pub count: u64,
}
