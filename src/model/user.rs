use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Full profile document from `GET /api/v2/users/{id}/{mode}`.
///
/// Only `id` is required. Every other attribute may be missing from the
/// document and is kept as an `Option` until projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub statistics: Option<UserStatistics>,
    #[serde(default)]
    pub playstyle: Playstyle,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub is_supporter: Option<bool>,
    #[serde(default)]
    pub profile_colour: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub twitch_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Ruleset statistics embedded in a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    #[serde(default)]
    pub global_rank: Option<u32>,
    #[serde(default)]
    pub country_rank: Option<u32>,
    #[serde(default)]
    pub pp: Option<f64>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub hit_accuracy: Option<f64>,
    #[serde(default)]
    pub play_count: Option<u64>,
    /// Total play time in seconds.
    #[serde(default)]
    pub play_time: Option<u64>,
    #[serde(default)]
    pub total_score: Option<u64>,
    #[serde(default)]
    pub ranked_score: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub current: Option<u32>,
}

/// Input devices a player lists on their profile.
///
/// The API sends either a list of strings, a single string, or nothing at
/// all. Any other shape is treated as [`Playstyle::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Playstyle {
    #[default]
    Absent,
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlaystyle {
    List(Vec<String>),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for Playstyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPlaystyle::deserialize(deserializer)? {
            RawPlaystyle::List(devices) => Playstyle::List(devices),
            RawPlaystyle::Text(device) => Playstyle::Text(device),
            RawPlaystyle::Other(_) => Playstyle::Absent,
        })
    }
}
